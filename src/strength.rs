//! Strength labels and the criteria-count mapping.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Qualitative strength of a password.
///
/// Variants are ordered by tier, so `Weak < Medium < Strong < VeryStrong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStrengthError {
    #[error("Unknown strength label: {0:?}")]
    Unknown(String),
}

impl StrengthLabel {
    /// All labels, weakest first.
    pub const ALL: [StrengthLabel; 4] = [
        StrengthLabel::Weak,
        StrengthLabel::Medium,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
    ];

    /// Maps the number of satisfied criteria to a label.
    ///
    /// | met    | label         |
    /// |--------|---------------|
    /// | 0, 1   | `weak`        |
    /// | 2, 3   | `medium`      |
    /// | 4      | `strong`      |
    /// | 5      | `very strong` |
    ///
    /// Counts above 5 cannot come out of an evaluation; they fall back to `Weak`.
    pub fn from_criteria_met(met: usize) -> Self {
        match met {
            0 | 1 => StrengthLabel::Weak,
            2 | 3 => StrengthLabel::Medium,
            4 => StrengthLabel::Strong,
            5 => StrengthLabel::VeryStrong,
            _ => StrengthLabel::Weak,
        }
    }

    /// The exact label literal shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLabel {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrengthLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ParseStrengthError::Unknown(s.to_string()))
    }
}
