//! The four fixed assessment pillars and their derived aggregates.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::Band;

/// One of the four fixed top-level assessment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PillarName {
    #[serde(rename = "Domain Ownership")]
    DomainOwnership,
    #[serde(rename = "Data as a Product")]
    DataAsAProduct,
    #[serde(rename = "Self-Serve Data Platform")]
    SelfServeDataPlatform,
    #[serde(rename = "Federated Governance")]
    FederatedGovernance,
}

impl PillarName {
    /// All pillars in display order.
    pub const ALL: [PillarName; 4] = [
        PillarName::DomainOwnership,
        PillarName::DataAsAProduct,
        PillarName::SelfServeDataPlatform,
        PillarName::FederatedGovernance,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PillarName::DomainOwnership => "Domain Ownership",
            PillarName::DataAsAProduct => "Data as a Product",
            PillarName::SelfServeDataPlatform => "Self-Serve Data Platform",
            PillarName::FederatedGovernance => "Federated Governance",
        }
    }

    /// Looks up a pillar by its display label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for PillarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Aggregate view of one pillar within a domain.
///
/// Always derived from the domain's questions; never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub name: PillarName,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub band: Band,
    #[serde(default)]
    pub scored_count: usize,
    #[serde(default)]
    pub total_count: usize,
}

impl Pillar {
    /// Creates an empty, unassessed pillar.
    pub fn unassessed(name: PillarName) -> Self {
        Self {
            name,
            avg_score: None,
            band: Band::NotAssessed,
            scored_count: 0,
            total_count: 0,
        }
    }
}

/// A pillar entry as it arrives in fetched data, before its name is checked.
#[derive(Deserialize)]
struct PillarEntry {
    name: String,
    #[serde(default)]
    avg_score: Option<f64>,
    #[serde(default)]
    band: Band,
    #[serde(default)]
    scored_count: usize,
    #[serde(default)]
    total_count: usize,
}

/// Deserializes a pillar list, dropping entries whose name is not a known pillar.
pub(crate) fn deserialize_known_pillars<'de, D>(deserializer: D) -> Result<Vec<Pillar>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<PillarEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            let Some(name) = PillarName::from_label(&entry.name) else {
                tracing::warn!(pillar = %entry.name, "Skipping pillar with unknown name");
                return None;
            };
            Some(Pillar {
                name,
                avg_score: entry.avg_score,
                band: entry.band,
                scored_count: entry.scored_count,
                total_count: entry.total_count,
            })
        })
        .collect())
}

/// Deserializes a list of pillar labels, dropping unknown ones.
pub(crate) fn deserialize_known_pillar_names<'de, D>(
    deserializer: D,
) -> Result<Vec<PillarName>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = Vec::<String>::deserialize(deserializer)?;
    Ok(labels
        .into_iter()
        .filter_map(|label| {
            let name = PillarName::from_label(&label);
            if name.is_none() {
                tracing::warn!(pillar = %label, "Skipping unknown pillar label");
            }
            name
        })
        .collect())
}
