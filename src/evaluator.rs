//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use std::any::Any;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::input::PasswordInput;
use crate::sections::Criterion;
use crate::strength::StrengthLabel;

/// Detailed result of evaluating a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    /// Satisfied criteria, in [`Criterion::ALL`] order.
    pub met: Vec<Criterion>,
    pub label: StrengthLabel,
}

impl PasswordEvaluation {
    pub fn criteria_met(&self) -> usize {
        self.met.len()
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        self.met.contains(&criterion)
    }

    /// Criteria still to satisfy, in [`Criterion::ALL`] order.
    pub fn missing(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|c| !self.is_met(*c))
            .collect()
    }

    /// Feedback messages for the missing criteria.
    pub fn reasons(&self) -> Vec<&'static str> {
        self.missing().iter().map(Criterion::hint).collect()
    }
}

/// Classifies a password into one of four strength labels.
///
/// Anything that is not text, and the empty string, is `weak`. Otherwise the
/// label follows from how many of the five criteria the text satisfies.
/// Never panics.
///
/// # Example
///
/// ```rust
/// use pwd_meter::{evaluate, StrengthLabel};
///
/// assert_eq!(evaluate("Password1!"), StrengthLabel::VeryStrong);
/// assert_eq!(evaluate("short").as_str(), "weak");
/// assert_eq!(evaluate(42_u32), StrengthLabel::Weak);
/// ```
pub fn evaluate(password: impl Into<PasswordInput>) -> StrengthLabel {
    match password.into().text() {
        Some(pwd) => evaluate_text(pwd).label,
        None => StrengthLabel::Weak,
    }
}

/// Same as [`evaluate`] for a type-erased value.
///
/// ```rust
/// use pwd_meter::{evaluate_any, StrengthLabel};
///
/// let form_value: Box<dyn std::any::Any> = Box::new(String::from("Password1"));
/// assert_eq!(evaluate_any(form_value.as_ref()), StrengthLabel::Strong);
/// assert_eq!(evaluate_any(&2.5_f64), StrengthLabel::Weak);
/// ```
pub fn evaluate_any(password: &dyn Any) -> StrengthLabel {
    evaluate(PasswordInput::from_any(password))
}

/// Evaluates password strength and returns which criteria were satisfied.
///
/// The label always equals `evaluate` on the same text. An empty password
/// satisfies nothing.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    evaluate_text(password.expose_secret())
}

// Orchestrator: run every section over the text, then map the count.
fn evaluate_text(pwd: &str) -> PasswordEvaluation {
    if pwd.is_empty() {
        return PasswordEvaluation {
            met: Vec::new(),
            label: StrengthLabel::Weak,
        };
    }

    let met: Vec<Criterion> = Criterion::ALL
        .into_iter()
        .filter(|c| c.is_met(pwd))
        .collect();
    let label = StrengthLabel::from_criteria_met(met.len());

    PasswordEvaluation { met, label }
}

/// Async version that sends the evaluation result via channel.
///
/// Nothing is sent if `token` is cancelled before the result is delivered.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluation is about to start");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("password evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation cancelled before delivery");
        }
        result = tx.send(evaluation) => {
            #[cfg(feature = "tracing")]
            if let Err(e) = result {
                tracing::error!("Failed to send password evaluation result: {}", e);
            }
            #[cfg(not(feature = "tracing"))]
            let _ = result;
        }
    }
}
