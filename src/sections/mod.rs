//! Password evaluation sections
//!
//! Each section checks one criterion. A criterion contributes at most 1 to
//! the criteria-met count.

use std::fmt;

mod length;
mod special;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use special::{special_character_section, SPECIAL_CHARACTERS};
pub use variety::{digit_section, lowercase_section, uppercase_section};

/// Signature shared by every section: `true` when the criterion is satisfied.
pub type SectionCheck = fn(&str) -> bool;

/// One of the five independent scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    Length,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl Criterion {
    /// Every criterion, in evaluation order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Lowercase,
        Criterion::Uppercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    fn section(&self) -> SectionCheck {
        match self {
            Criterion::Length => length_section,
            Criterion::Lowercase => lowercase_section,
            Criterion::Uppercase => uppercase_section,
            Criterion::Digit => digit_section,
            Criterion::Special => special_character_section,
        }
    }

    /// Runs this criterion's section over the whole password.
    pub fn is_met(&self, password: &str) -> bool {
        (self.section())(password)
    }

    /// Feedback shown when the criterion is not met.
    pub fn hint(&self) -> &'static str {
        match self {
            Criterion::Length => "Password must be at least 8 characters",
            Criterion::Lowercase => "Add a lowercase letter (a-z)",
            Criterion::Uppercase => "Add an uppercase letter (A-Z)",
            Criterion::Digit => "Add a number (0-9)",
            Criterion::Special => "Add a special character (-!@#$%^&*()_+=[]{}|;:,.<>?)",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::Length => "length",
            Criterion::Lowercase => "lowercase",
            Criterion::Uppercase => "uppercase",
            Criterion::Digit => "digit",
            Criterion::Special => "special",
        };
        f.write_str(name)
    }
}
