//! Maturity assessment domain.
//!
//! Scores roll up question → pillar → domain → organization:
//!
//! - `band` - Band Classifier
//! - `overrides` - Override Store
//! - `aggregation` - Aggregation Engine
//! - `domain_detail`, `summary` - the open domain snapshot and the cached projections
//! - `organization` - organization-wide views over the caches

mod aggregation;
mod band;
mod domain_detail;
mod events;
mod organization;
mod overrides;
mod pillar;
mod question;
mod summary;

pub use aggregation::{round_aggregate, AggregationEngine, AGGREGATE_DECIMALS};
pub use band::{
    classify, Band, DEFINED_THRESHOLD, DEVELOPING_THRESHOLD, MANAGED_THRESHOLD,
    OPTIMIZED_THRESHOLD,
};
pub use domain_detail::{DomainAssessment, DomainStats};
pub use events::{ScoreChangedEvent, SCORE_CHANGED_EVENT};
pub use organization::{BandCount, OrganizationSummary, PillarRanking, RankingEntry};
pub use overrides::{DomainOverrides, OverrideRecord, OverrideStore};
pub use pillar::{Pillar, PillarName};
pub use question::Question;
pub use summary::{DomainSummary, MatrixRow, Overview};
