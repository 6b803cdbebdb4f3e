//! File-backed Assessment Catalog
//!
//! Serves pre-computed assessment data loaded once from a data directory:
//!
//! ```text
//! data/
//!   domains.json    [DomainSummary]
//!   overview.json   { pillars, matrix }
//!   details.json    { domain name: DomainAssessment }
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::assessment::{DomainAssessment, DomainSummary, Overview};
use crate::ports::{AssessmentReader, SourceError};

pub const DOMAINS_FILE: &str = "domains.json";
pub const OVERVIEW_FILE: &str = "overview.json";
pub const DETAILS_FILE: &str = "details.json";

/// Errors raised while loading the data directory.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// In-memory catalog of pre-computed assessment data.
#[derive(Debug, Clone, Default)]
pub struct FileAssessmentCatalog {
    domains: Vec<DomainSummary>,
    overview: Overview,
    details: BTreeMap<String, DomainAssessment>,
}

impl FileAssessmentCatalog {
    /// Creates a catalog from already-loaded data.
    ///
    /// A detail without a `domain` field takes its key as name.
    pub fn new(
        domains: Vec<DomainSummary>,
        overview: Overview,
        details: BTreeMap<String, DomainAssessment>,
    ) -> Self {
        let details = details
            .into_iter()
            .map(|(name, mut detail)| {
                if detail.domain.is_empty() {
                    detail.domain = name.clone();
                }
                (name, detail)
            })
            .collect();

        Self {
            domains,
            overview,
            details,
        }
    }

    /// Loads the three data files from `data_dir`.
    ///
    /// # Example
    /// ```ignore
    /// let catalog = FileAssessmentCatalog::load("./data").await?;
    /// ```
    pub async fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self, CatalogLoadError> {
        let dir = data_dir.as_ref();

        let domains: Vec<DomainSummary> = read_json(&dir.join(DOMAINS_FILE)).await?;
        let overview: Overview = read_json(&dir.join(OVERVIEW_FILE)).await?;
        let details: BTreeMap<String, DomainAssessment> =
            read_json(&dir.join(DETAILS_FILE)).await?;

        tracing::info!(
            data_dir = %dir.display(),
            domains = domains.len(),
            details = details.len(),
            "Loaded pre-computed assessment data"
        );

        Ok(Self::new(domains, overview, details))
    }

    /// Number of domains with a detail entry.
    pub fn detail_count(&self) -> usize {
        self.details.len()
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogLoadError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| CatalogLoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    serde_json::from_str(&raw).map_err(|e| CatalogLoadError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[async_trait]
impl AssessmentReader for FileAssessmentCatalog {
    async fn list_domains(&self) -> Result<Vec<DomainSummary>, SourceError> {
        Ok(self.domains.clone())
    }

    async fn get_overview(&self) -> Result<Overview, SourceError> {
        Ok(self.overview.clone())
    }

    async fn get_domain_detail(&self, domain: &str) -> Result<DomainAssessment, SourceError> {
        self.details
            .get(domain)
            .cloned()
            .ok_or_else(|| SourceError::DomainNotFound(domain.to_string()))
    }
}
