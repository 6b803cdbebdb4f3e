//! Override Store - user-assigned question scores keyed by domain and question.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::domain::foundation::Score;

/// Overrides for a single domain: question id → score.
pub type DomainOverrides = BTreeMap<String, Score>;

/// Snapshot as received from the remote store, values not yet validated.
type RawSnapshot = BTreeMap<String, BTreeMap<String, JsonValue>>;

/// All overrides of a session, keyed by domain name.
///
/// An entry exists only while it holds a score: setting `None` removes it,
/// and a domain whose last override is removed disappears from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSnapshot", into = "BTreeMap<String, DomainOverrides>")]
pub struct OverrideStore {
    entries: BTreeMap<String, DomainOverrides>,
}

impl OverrideStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from a snapshot, dropping empty domain entries.
    pub fn from_entries(entries: BTreeMap<String, DomainOverrides>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|(_, overrides)| !overrides.is_empty())
            .collect();
        Self { entries }
    }

    /// Inserts, replaces (`Some`) or removes (`None`) one override.
    pub fn set(&mut self, domain: &str, question_id: &str, score: Option<Score>) {
        match score {
            Some(score) => {
                self.entries
                    .entry(domain.to_string())
                    .or_default()
                    .insert(question_id.to_string(), score);
            }
            None => {
                if let Some(overrides) = self.entries.get_mut(domain) {
                    overrides.remove(question_id);
                    if overrides.is_empty() {
                        self.entries.remove(domain);
                    }
                }
            }
        }
    }

    /// Returns the overrides of a domain (empty if none).
    pub fn get(&self, domain: &str) -> DomainOverrides {
        self.entries.get(domain).cloned().unwrap_or_default()
    }

    /// Returns one override, if present.
    pub fn score_for(&self, domain: &str, question_id: &str) -> Option<Score> {
        self.entries
            .get(domain)
            .and_then(|overrides| overrides.get(question_id))
            .copied()
    }

    /// Returns the full snapshot.
    pub fn entries(&self) -> &BTreeMap<String, DomainOverrides> {
        &self.entries
    }

    /// Total number of overridden questions across all domains.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Returns true when no override is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<RawSnapshot> for OverrideStore {
    /// Keeps every valid override; values outside 1..=5 or not integral are
    /// dropped with a warning.
    fn from(raw: RawSnapshot) -> Self {
        let entries = raw
            .into_iter()
            .map(|(domain, questions)| {
                let overrides = questions
                    .into_iter()
                    .filter_map(|(question_id, value)| match snapshot_score(&value) {
                        Some(score) => Some((question_id, score)),
                        None => {
                            tracing::warn!(
                                domain = %domain,
                                question_id = %question_id,
                                value = %value,
                                "Skipping invalid stored override"
                            );
                            None
                        }
                    })
                    .collect();
                (domain, overrides)
            })
            .collect();
        Self::from_entries(entries)
    }
}

fn snapshot_score(value: &JsonValue) -> Option<Score> {
    let raw = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })?;
    Score::try_new(raw).ok()
}

impl From<OverrideStore> for BTreeMap<String, DomainOverrides> {
    fn from(store: OverrideStore) -> Self {
        store.entries
    }
}

/// A single override mutation as replicated to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRecord {
    pub domain: String,
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub score: Option<Score>,
}

impl OverrideRecord {
    pub fn new(
        domain: impl Into<String>,
        question_id: impl Into<String>,
        score: Option<Score>,
    ) -> Self {
        Self {
            domain: domain.into(),
            question_id: question_id.into(),
            score,
        }
    }
}
