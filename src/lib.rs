//! Mesh Maturity - Data Mesh Maturity Self-Assessment
//!
//! This crate computes hierarchical maturity scores
//! (question → pillar → domain → organization) and propagates manual
//! question-level overrides through every view that depends on them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
