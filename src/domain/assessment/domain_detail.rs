//! Full per-domain assessment: questions, pillar aggregates and overall score.

use serde::{Deserialize, Serialize};

use super::pillar::deserialize_known_pillars;
use super::{AggregationEngine, Band, DomainOverrides, Pillar, PillarName, Question};

/// Platform statistics shipped with a domain detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainStats {
    pub workspaces: u32,
    pub total_items: u32,
    pub has_dev: bool,
    pub has_test: bool,
    pub has_prod: bool,
}

/// Full detail of one domain.
///
/// `pillars`, `overall_score` and `overall_band` are derived from
/// `questions` by [`AggregationEngine::recompute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAssessment {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, deserialize_with = "deserialize_known_pillars")]
    pub pillars: Vec<Pillar>,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub overall_band: Band,
    #[serde(default)]
    pub stats: DomainStats,
}

impl DomainAssessment {
    /// Creates a domain from its questions, with aggregates computed.
    pub fn new(domain: impl Into<String>, questions: Vec<Question>) -> Self {
        let mut assessment = Self {
            domain: domain.into(),
            questions,
            pillars: Vec::new(),
            overall_score: None,
            overall_band: Band::NotAssessed,
            stats: DomainStats::default(),
        };
        AggregationEngine::recompute(&mut assessment);
        assessment
    }

    /// Prepares a freshly fetched domain for display.
    ///
    /// Captures each question's fetched score as its computed baseline,
    /// applies the stored overrides and recomputes every aggregate.
    pub fn open(mut fetched: DomainAssessment, overrides: &DomainOverrides) -> Self {
        for question in &mut fetched.questions {
            question.capture_computed_score();
        }
        AggregationEngine::apply_overrides(&mut fetched, overrides);
        AggregationEngine::recompute(&mut fetched);
        fetched
    }

    /// Attaches platform statistics.
    pub fn with_stats(mut self, stats: DomainStats) -> Self {
        self.stats = stats;
        self
    }

    /// Finds a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub(crate) fn question_mut(&mut self, id: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }

    /// Finds the aggregate for a pillar.
    pub fn pillar(&self, name: PillarName) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.name == name)
    }

    /// Returns the questions belonging to a pillar.
    pub fn questions_in(&self, name: PillarName) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.pillar_name() == Some(name))
    }
}
