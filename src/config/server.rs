//! Assessment service settings

use http::HeaderValue;
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};

use super::error::ValidationError;

/// Settings of the assessment HTTP service
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the service listens on, e.g. `0.0.0.0:8080`
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Log filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Dashboard origins allowed to call the API (comma-separated).
    /// Unset means any origin.
    pub dashboard_origins: Option<String>,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Dashboard origins as CORS header values.
    ///
    /// Blank entries are skipped. An empty list means any origin.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, ValidationError> {
        let Some(origins) = &self.dashboard_origins else {
            return Ok(Vec::new());
        };
        origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ValidationError::InvalidOrigin(origin.to_string()))
            })
            .collect()
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.listen.port() == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.allowed_origins()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            dashboard_origins: None,
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
}

fn default_log_level() -> String {
    "info,mesh_maturity=debug,tower_http=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
