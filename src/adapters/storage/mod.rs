//! Storage adapters for assessment data and overrides.
//!
//! - `FileAssessmentCatalog` - pre-computed data loaded from a data directory
//! - `InMemoryOverrideRepository` - process-lifetime override store

mod file_catalog;
mod in_memory_overrides;

pub use file_catalog::{
    CatalogLoadError, FileAssessmentCatalog, DETAILS_FILE, DOMAINS_FILE, OVERVIEW_FILE,
};
pub use in_memory_overrides::InMemoryOverrideRepository;
