//! Aggregation Engine - rolls question scores up into pillar and domain scores.

use std::collections::BTreeMap;

use super::{Band, DomainAssessment, DomainOverrides, Pillar, PillarName};

/// Number of decimal places kept on every aggregate.
pub const AGGREGATE_DECIMALS: i32 = 2;

/// Rounds to [`AGGREGATE_DECIMALS`] places, half away from zero.
pub fn round_aggregate(value: f64) -> f64 {
    let factor = 10f64.powi(AGGREGATE_DECIMALS);
    (value * factor).round() / factor
}

/// Stateless calculator for domain aggregates.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Mean of `scores`, rounded once after the full-precision division.
    ///
    /// # Edge Cases
    /// - Empty scores: Returns `None`
    pub fn mean(scores: &[f64]) -> Option<f64> {
        if scores.is_empty() {
            return None;
        }
        let sum: f64 = scores.iter().sum();
        Some(round_aggregate(sum / scores.len() as f64))
    }

    /// Replaces score and band of every question that has an override.
    ///
    /// Overrides naming questions the domain does not contain are ignored.
    pub fn apply_overrides(domain: &mut DomainAssessment, overrides: &DomainOverrides) {
        for question in &mut domain.questions {
            if let Some(score) = overrides.get(&question.id) {
                question.apply_override(*score);
            }
        }
    }

    /// Recomputes every pillar aggregate and the overall score.
    ///
    /// The pillar list is rebuilt with one entry per fixed pillar, in display
    /// order. Questions with an unknown pillar count toward the overall
    /// score only.
    pub fn recompute(domain: &mut DomainAssessment) {
        let mut buckets: BTreeMap<PillarName, (Vec<f64>, usize)> = PillarName::ALL
            .into_iter()
            .map(|name| (name, (Vec::new(), 0)))
            .collect();
        let mut all_scores = Vec::with_capacity(domain.questions.len());

        for question in &domain.questions {
            if let Some(score) = question.score {
                all_scores.push(score);
            }

            let Some(name) = question.pillar_name() else {
                tracing::debug!(
                    domain = %domain.domain,
                    question_id = %question.id,
                    pillar = %question.pillar,
                    "Question has unknown pillar, counted toward overall only"
                );
                continue;
            };

            if let Some((scores, total)) = buckets.get_mut(&name) {
                *total += 1;
                if let Some(score) = question.score {
                    scores.push(score);
                }
            }
        }

        domain.pillars = PillarName::ALL
            .into_iter()
            .map(|name| match buckets.get(&name) {
                Some((scores, total)) => {
                    let avg_score = Self::mean(scores);
                    Pillar {
                        name,
                        avg_score,
                        band: Band::classify(avg_score),
                        scored_count: scores.len(),
                        total_count: *total,
                    }
                }
                None => Pillar::unassessed(name),
            })
            .collect();

        domain.overall_score = Self::mean(&all_scores);
        domain.overall_band = Band::classify(domain.overall_score);
    }
}
