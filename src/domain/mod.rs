//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, events, errors)
//! - `assessment` - Maturity scores, overrides and their aggregation

pub mod assessment;
pub mod foundation;
