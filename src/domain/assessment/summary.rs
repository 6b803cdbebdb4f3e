//! Cached per-domain projections used by organization-wide and comparison views.

use serde::{Deserialize, Serialize};

use super::pillar::{deserialize_known_pillar_names, deserialize_known_pillars};
use super::{Band, DomainAssessment, Pillar, PillarName};

/// Lightweight per-domain aggregate (`allDomains` entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSummary {
    pub domain: String,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub overall_band: Band,
    #[serde(default, deserialize_with = "deserialize_known_pillars")]
    pub pillars: Vec<Pillar>,
}

impl DomainSummary {
    /// Projects a full domain detail into a summary entry.
    pub fn from_assessment(assessment: &DomainAssessment) -> Self {
        Self {
            domain: assessment.domain.clone(),
            overall_score: assessment.overall_score,
            overall_band: assessment.overall_band,
            pillars: assessment.pillars.clone(),
        }
    }

    /// Overwrites the aggregates with those of `assessment`.
    ///
    /// Pillars are cloned so the cache never shares state with the snapshot.
    pub(crate) fn refresh_from(&mut self, assessment: &DomainAssessment) {
        self.overall_score = assessment.overall_score;
        self.overall_band = assessment.overall_band;
        self.pillars = assessment.pillars.clone();
    }
}

/// Flattened per-domain aggregates for the cross-domain matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub domain: String,
    #[serde(rename = "Domain Ownership", default)]
    pub domain_ownership: Option<f64>,
    #[serde(rename = "Data as a Product", default)]
    pub data_as_a_product: Option<f64>,
    #[serde(rename = "Self-Serve Data Platform", default)]
    pub self_serve_data_platform: Option<f64>,
    #[serde(rename = "Federated Governance", default)]
    pub federated_governance: Option<f64>,
    #[serde(default)]
    pub overall: Option<f64>,
}

impl MatrixRow {
    /// Creates a row with every value unset.
    pub fn empty(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            domain_ownership: None,
            data_as_a_product: None,
            self_serve_data_platform: None,
            federated_governance: None,
            overall: None,
        }
    }

    /// Projects a full domain detail into a matrix row.
    pub fn from_assessment(assessment: &DomainAssessment) -> Self {
        let mut row = Self::empty(assessment.domain.clone());
        row.refresh_from(assessment);
        row
    }

    /// Returns the value for one pillar.
    pub fn value(&self, pillar: PillarName) -> Option<f64> {
        match pillar {
            PillarName::DomainOwnership => self.domain_ownership,
            PillarName::DataAsAProduct => self.data_as_a_product,
            PillarName::SelfServeDataPlatform => self.self_serve_data_platform,
            PillarName::FederatedGovernance => self.federated_governance,
        }
    }

    fn value_mut(&mut self, pillar: PillarName) -> &mut Option<f64> {
        match pillar {
            PillarName::DomainOwnership => &mut self.domain_ownership,
            PillarName::DataAsAProduct => &mut self.data_as_a_product,
            PillarName::SelfServeDataPlatform => &mut self.self_serve_data_platform,
            PillarName::FederatedGovernance => &mut self.federated_governance,
        }
    }

    /// Overwrites `overall` and every pillar value with those of `assessment`.
    pub(crate) fn refresh_from(&mut self, assessment: &DomainAssessment) {
        self.overall = assessment.overall_score;
        for name in PillarName::ALL {
            *self.value_mut(name) = assessment.pillar(name).and_then(|p| p.avg_score);
        }
    }
}

/// Cross-domain comparison data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    #[serde(
        default = "default_pillars",
        deserialize_with = "deserialize_known_pillar_names"
    )]
    pub pillars: Vec<PillarName>,
    #[serde(default)]
    pub matrix: Vec<MatrixRow>,
}

fn default_pillars() -> Vec<PillarName> {
    PillarName::ALL.to_vec()
}

impl Default for Overview {
    fn default() -> Self {
        Self {
            pillars: default_pillars(),
            matrix: Vec::new(),
        }
    }
}

impl Overview {
    /// Finds the matrix row of a domain.
    pub fn row(&self, domain: &str) -> Option<&MatrixRow> {
        self.matrix.iter().find(|r| r.domain == domain)
    }

    pub(crate) fn row_mut(&mut self, domain: &str) -> Option<&mut MatrixRow> {
        self.matrix.iter_mut().find(|r| r.domain == domain)
    }

    /// Orders the matrix by overall score, highest first.
    ///
    /// Unscored rows sort as 0; ties keep their relative order.
    pub fn sort_by_overall_desc(&mut self) {
        self.matrix
            .sort_by(|a, b| b.overall.unwrap_or(0.0).total_cmp(&a.overall.unwrap_or(0.0)));
    }
}
