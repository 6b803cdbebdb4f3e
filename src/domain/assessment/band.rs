//! Maturity bands and the score classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) of the Optimized band.
pub const OPTIMIZED_THRESHOLD: f64 = 4.5;
/// Lower bound (inclusive) of the Managed band.
pub const MANAGED_THRESHOLD: f64 = 3.5;
/// Lower bound (inclusive) of the Defined band.
pub const DEFINED_THRESHOLD: f64 = 2.5;
/// Lower bound (inclusive) of the Developing band.
pub const DEVELOPING_THRESHOLD: f64 = 1.5;

/// Maturity band derived from a numeric score.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Band {
    Initial,
    Developing,
    Defined,
    Managed,
    Optimized,
    #[default]
    #[serde(rename = "Not Assessed")]
    NotAssessed,
}

impl Band {
    /// The five assessed bands, highest first.
    pub const ASSESSED: [Band; 5] = [
        Band::Optimized,
        Band::Managed,
        Band::Defined,
        Band::Developing,
        Band::Initial,
    ];

    /// Classifies a score into its band.
    ///
    /// Total over its input: `None` and NaN map to `NotAssessed`, anything
    /// below 1.5 (including 0 and negatives) is `Initial`.
    pub fn classify(score: Option<f64>) -> Band {
        match score {
            None => Band::NotAssessed,
            Some(s) if s.is_nan() => Band::NotAssessed,
            Some(s) if s >= OPTIMIZED_THRESHOLD => Band::Optimized,
            Some(s) if s >= MANAGED_THRESHOLD => Band::Managed,
            Some(s) if s >= DEFINED_THRESHOLD => Band::Defined,
            Some(s) if s >= DEVELOPING_THRESHOLD => Band::Developing,
            Some(_) => Band::Initial,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Band::Initial => "Initial",
            Band::Developing => "Developing",
            Band::Defined => "Defined",
            Band::Managed => "Managed",
            Band::Optimized => "Optimized",
            Band::NotAssessed => "Not Assessed",
        }
    }

    /// Returns true for every band except `NotAssessed`.
    pub fn is_assessed(&self) -> bool {
        !matches!(self, Band::NotAssessed)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Free-function form of [`Band::classify`].
pub fn classify(score: Option<f64>) -> Band {
    Band::classify(score)
}
