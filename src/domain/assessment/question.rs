//! Assessment questions - the leaves of the score hierarchy.

use serde::{Deserialize, Serialize};

use super::{Band, PillarName};
use crate::domain::foundation::Score;

/// A single assessment question within a domain.
///
/// `pillar` is kept as the raw label so that questions tagged with an
/// unknown pillar still load; they count toward the domain's overall score
/// but toward no pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub pillar: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub band: Band,
    /// Score as fetched with the domain detail, before any override.
    #[serde(skip)]
    computed_score: Option<f64>,
}

impl Question {
    /// Creates a question whose computed score is `score`.
    pub fn new(
        id: impl Into<String>,
        pillar: impl Into<String>,
        text: impl Into<String>,
        score: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            pillar: pillar.into(),
            text: text.into(),
            score,
            band: Band::classify(score),
            computed_score: score,
        }
    }

    /// Returns the pillar this question belongs to, if the label is known.
    pub fn pillar_name(&self) -> Option<PillarName> {
        PillarName::from_label(&self.pillar)
    }

    /// Returns the score the question carried before any override.
    pub fn computed_score(&self) -> Option<f64> {
        self.computed_score
    }

    /// Returns true when the current score is an override of the computed one.
    pub fn is_overridden(&self) -> bool {
        self.score != self.computed_score
    }

    /// Records the freshly fetched score as the computed baseline and
    /// normalizes the band to match it.
    pub(crate) fn capture_computed_score(&mut self) {
        self.computed_score = self.score;
        self.band = Band::classify(self.score);
    }

    pub(crate) fn apply_override(&mut self, score: Score) {
        self.score = Some(score.as_f64());
        self.band = Band::classify(self.score);
    }

    /// Drops any override and returns to the computed score.
    pub(crate) fn clear_override(&mut self) {
        self.score = self.computed_score;
        self.band = Band::classify(self.score);
    }

    /// Applies `Some(score)` as an override or clears it on `None`.
    pub(crate) fn set_override(&mut self, score: Option<Score>) {
        match score {
            Some(score) => self.apply_override(score),
            None => self.clear_override(),
        }
    }
}
