//! HTTP Assessment Client - consumes a remote assessment service.
//!
//! Implements both [`AssessmentReader`] and [`OverrideRepository`] against
//! the service's REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpClientConfig::new("http://localhost:8080")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = HttpAssessmentClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::assessment::{
    DomainAssessment, DomainSummary, OverrideRecord, OverrideStore, Overview,
};
use crate::ports::{AssessmentReader, OverrideRepository, SourceError};

/// Configuration for the HTTP assessment client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the assessment service.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpClientConfig {
    /// Creates a configuration for `base_url` with a 30 second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// REST client for the assessment service.
#[derive(Debug, Clone)]
pub struct HttpAssessmentClient {
    base_url: Url,
    client: Client,
}

impl HttpAssessmentClient {
    /// Creates a client; fails on an unparseable base URL.
    pub fn new(config: HttpClientConfig) -> Result<Self, SourceError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| SourceError::Transport(format!("Invalid base URL: {}", e)))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// Builds an endpoint URL from path segments; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::Transport("Base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SourceError> {
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let response = ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| SourceError::InvalidPayload(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Transport(format!("Request timed out: {}", e))
    } else if e.is_connect() {
        SourceError::Transport(format!("Connection failed: {}", e))
    } else {
        SourceError::Transport(e.to_string())
    }
}

async fn ensure_success(response: Response) -> Result<Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SourceError::Rejected(format!("{}: {}", status, body)))
}

#[async_trait]
impl AssessmentReader for HttpAssessmentClient {
    async fn list_domains(&self) -> Result<Vec<DomainSummary>, SourceError> {
        self.get_json(self.endpoint(&["api", "domains"])?).await
    }

    async fn get_overview(&self) -> Result<Overview, SourceError> {
        self.get_json(self.endpoint(&["api", "overview"])?).await
    }

    async fn get_domain_detail(&self, domain: &str) -> Result<DomainAssessment, SourceError> {
        let url = self.endpoint(&["api", "domain", domain])?;
        let response = self.client.get(url).send().await.map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::DomainNotFound(domain.to_string()));
        }

        let response = ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| SourceError::InvalidPayload(e.to_string()))
    }
}

#[async_trait]
impl OverrideRepository for HttpAssessmentClient {
    async fn load_all(&self) -> Result<OverrideStore, SourceError> {
        self.get_json(self.endpoint(&["api", "overrides"])?).await
    }

    async fn save(&self, record: &OverrideRecord) -> Result<(), SourceError> {
        let url = self.endpoint(&["api", "override"])?;
        let response = self
            .client
            .post(url)
            .json(record)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpAssessmentClient {
        HttpAssessmentClient::new(HttpClientConfig::new(base)).unwrap()
    }

    #[test]
    fn config_defaults_to_thirty_second_timeout() {
        let config = HttpClientConfig::new("http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(30));

        let config = config.with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = HttpAssessmentClient::new(HttpClientConfig::new("not a url"));
        assert!(matches!(result, Err(SourceError::Transport(_))));
    }

    #[test]
    fn endpoint_joins_segments() {
        let url = client("http://localhost:8080").endpoint(&["api", "domains"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/domains");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let url = client("http://example.com/mesh/")
            .endpoint(&["api", "overview"])
            .unwrap();
        assert_eq!(url.as_str(), "http://example.com/mesh/api/overview");
    }

    #[test]
    fn endpoint_encodes_domain_names() {
        let url = client("http://localhost:8080")
            .endpoint(&["api", "domain", "sales & marketing"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/domain/sales%20&%20marketing"
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_transport_error() {
        let client = HttpAssessmentClient::new(
            HttpClientConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let result = client.list_domains().await;
        assert!(matches!(result, Err(SourceError::Transport(_))));
    }
}
