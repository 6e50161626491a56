//! Property-based tests for the evaluator.
//!
//! These tests use proptest to verify invariants around:
//! - Determinism of `evaluate`
//! - Label tier as a function of the criteria-met count
//! - Exactness of the special character set

use crate::evaluator::{evaluate, evaluate_password_strength};
use crate::sections::{Criterion, SPECIAL_CHARACTERS};
use crate::strength::StrengthLabel;
use proptest::prelude::*;
use secrecy::SecretString;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Filler that satisfies no criterion other than length.
fn arb_filler(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '~', '/', '\\', '"', '\'', '`', 'é']), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A representative character for one criterion.
fn arb_criterion_char(criterion: Criterion) -> BoxedStrategy<char> {
    match criterion {
        Criterion::Lowercase => prop::char::range('a', 'z').boxed(),
        Criterion::Uppercase => prop::char::range('A', 'Z').boxed(),
        Criterion::Digit => prop::char::range('0', '9').boxed(),
        Criterion::Special => prop::sample::select(SPECIAL_CHARACTERS.chars().collect::<Vec<_>>()).boxed(),
        Criterion::Length => Just(' ').boxed(),
    }
}

/// A password built to satisfy exactly the criteria selected by `mask`,
/// together with the expected number of satisfied criteria.
fn arb_constructed_password() -> impl Strategy<Value = (String, usize)> {
    prop::array::uniform5(any::<bool>()).prop_flat_map(|mask| {
        let wants_length = mask[0];
        let classes: Vec<Criterion> = Criterion::ALL[1..]
            .iter()
            .zip(&mask[1..])
            .filter(|(_, on)| **on)
            .map(|(c, _)| *c)
            .collect();
        let expected = classes.len() + usize::from(wants_length);

        let class_chars: Vec<BoxedStrategy<char>> =
            classes.into_iter().map(arb_criterion_char).collect();
        let base = class_chars.len();
        // Length criterion on: pad to 8..=16 code units; off: stay under 8.
        let filler_len = if wants_length {
            (8usize.saturating_sub(base)..=16 - base).boxed()
        } else {
            (0usize..=7 - base).boxed()
        };

        (class_chars, filler_len.prop_flat_map(arb_filler)).prop_map(move |(chars, filler)| {
            let mut password: String = chars.into_iter().collect();
            password.push_str(&filler);
            (password, expected)
        })
    })
}

fn expected_label(met: usize) -> StrengthLabel {
    match met {
        0 | 1 => StrengthLabel::Weak,
        2 | 3 => StrengthLabel::Medium,
        4 => StrengthLabel::Strong,
        _ => StrengthLabel::VeryStrong,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn evaluate_is_deterministic(password in ".*") {
        let first = evaluate(password.as_str());
        for _ in 0..3 {
            prop_assert_eq!(evaluate(password.as_str()), first);
        }
    }

    #[test]
    fn constructed_passwords_get_their_tier((password, met) in arb_constructed_password()) {
        prop_assume!(!password.is_empty());
        let evaluation = evaluate_password_strength(&SecretString::new(password.clone().into()));
        prop_assert_eq!(evaluation.criteria_met(), met, "password {:?}", password);
        prop_assert_eq!(evaluate(password.as_str()), expected_label(met));
    }

    #[test]
    fn label_never_decreases_with_criteria_met(a in 0usize..=5, b in 0usize..=5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(StrengthLabel::from_criteria_met(lo) <= StrengthLabel::from_criteria_met(hi));
    }

    #[test]
    fn report_label_matches_evaluate(password in ".*") {
        let evaluation = evaluate_password_strength(&SecretString::new(password.clone().into()));
        prop_assert_eq!(evaluation.label, evaluate(password.as_str()));
        prop_assert_eq!(evaluation.met.len() + evaluation.missing().len(), Criterion::ALL.len());
    }

    #[test]
    fn only_listed_punctuation_is_special(c in prop::char::range('!', '~')) {
        let expected = SPECIAL_CHARACTERS.contains(c);
        prop_assert_eq!(Criterion::Special.is_met(&c.to_string()), expected);
    }

    #[test]
    fn appending_special_never_lowers_label(password in "[a-zA-Z0-9]{0,12}", c in prop::sample::select(SPECIAL_CHARACTERS.chars().collect::<Vec<_>>())) {
        let mut extended = password.clone();
        extended.push(c);
        prop_assert!(evaluate(extended.as_str()) >= evaluate(password.as_str()));
    }
}
