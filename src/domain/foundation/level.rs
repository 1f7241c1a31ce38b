//! ScoreLevel enum and the fixed domain classification thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Averages at or below this classify as low.
pub const LOW_THRESHOLD: f64 = 8.0;

/// Averages at or above this classify as high.
pub const HIGH_THRESHOLD: f64 = 14.0;

/// Qualitative classification of a domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLevel {
    Low,
    Moderate,
    High,
}

impl ScoreLevel {
    /// Classifies a facet average against the fixed thresholds (inclusive).
    ///
    /// A NaN average falls through both comparisons and classifies as
    /// `Moderate`, matching the original tool's behavior for a domain
    /// missing from one person's profile.
    pub fn from_average(average: f64) -> ScoreLevel {
        if average <= LOW_THRESHOLD {
            ScoreLevel::Low
        } else if average >= HIGH_THRESHOLD {
            ScoreLevel::High
        } else {
            ScoreLevel::Moderate
        }
    }

    /// Returns the lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Low => "low",
            ScoreLevel::Moderate => "moderate",
            ScoreLevel::High => "high",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
