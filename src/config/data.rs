//! Data directory configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the pre-computed assessment files live
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding `domains.json`, `overview.json` and `details.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.data_dir"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
