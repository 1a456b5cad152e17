//! Evaluation result types.
//!
//! A report is a plain value: created fresh per evaluation, never mutated,
//! never shared across calls.

use std::fmt;

/// Generic advice shown alongside any evaluation result.
pub const IMPROVEMENT_TIPS: &[&str] = &[
    "Use at least 8 characters",
    "Include uppercase and lowercase letters",
    "Add numbers and special characters",
    "Avoid common words or patterns",
    "Use a unique password for each account",
];

/// Qualitative strength band, ordered from weakest to strongest.
///
/// `NoPassword` is the sentinel for empty input; it never arises from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    NoPassword,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a complexity score to its strength band.
    ///
    /// Total over the whole `u8` domain. The bands above 6 are unreachable
    /// with the current five criteria (true maximum is 6) but stay defined so
    /// the mapping does not shift if a criterion is ever added.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::VeryWeak,
            3..=4 => StrengthLabel::Weak,
            5..=6 => StrengthLabel::Moderate,
            7..=8 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    /// Display text for the band.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::NoPassword => "No Password Entered",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }

    /// Display color tag paired with the band.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::NoPassword => "gray",
            StrengthLabel::VeryWeak => "red",
            StrengthLabel::Weak => "orange",
            StrengthLabel::Moderate => "yellow",
            StrengthLabel::Strong => "green",
            StrengthLabel::VeryStrong => "darkgreen",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-criterion breakdown of a single evaluation.
///
/// Invariant: `complexity_score` equals the sum of the five criterion fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// 0 = too short, 1 = too long, 2 = within bounds.
    pub length: u8,
    /// 1 if an ASCII uppercase letter is present.
    pub uppercase: u8,
    /// 1 if an ASCII lowercase letter is present.
    pub lowercase: u8,
    /// 1 if a decimal digit is present.
    pub digits: u8,
    /// 1 if a character from the fixed special set is present.
    pub special_chars: u8,
    /// Sum of the five criterion fields; 0 to 6.
    pub complexity_score: u8,
    pub label: StrengthLabel,
}

impl StrengthReport {
    /// Sentinel report returned for empty input.
    pub(crate) fn no_password() -> Self {
        StrengthReport {
            length: 0,
            uppercase: 0,
            lowercase: 0,
            digits: 0,
            special_chars: 0,
            complexity_score: 0,
            label: StrengthLabel::NoPassword,
        }
    }

    /// Display color tag paired with this report's label.
    pub fn color(&self) -> &'static str {
        self.label.color()
    }
}
