//! Password strength meter
//!
//! Scores a candidate password against five fixed criteria and maps the
//! number satisfied to one of four labels: `weak`, `medium`, `strong` or
//! `very strong`. Intended as signup-form feedback, not as a policy check.
//!
//! # Criteria
//!
//! 1. At least 8 characters (UTF-16 code units)
//! 2. An ASCII lowercase letter
//! 3. An ASCII uppercase letter
//! 4. An ASCII digit
//! 5. One of `-!@#$%^&*()_+=[]{}|;:,.<>?`
//!
//! Non-textual input and the empty string are always `weak`.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, evaluate_password_strength, StrengthLabel};
//! use secrecy::SecretString;
//!
//! assert_eq!(evaluate("Password1!"), StrengthLabel::VeryStrong);
//!
//! let password = SecretString::new("Password1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Strength: {}", evaluation.label);
//! for reason in evaluation.reasons() {
//!     println!("  - {reason}");
//! }
//! ```

// Internal modules
mod evaluator;
mod input;
mod sections;
mod strength;

#[cfg(test)]
mod proptest;

// Public API
pub use evaluator::{evaluate, evaluate_any, evaluate_password_strength, PasswordEvaluation};
pub use input::PasswordInput;
pub use sections::{Criterion, MIN_LENGTH, SPECIAL_CHARACTERS};
pub use strength::{ParseStrengthError, StrengthLabel};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
