//! Overpass HTTP client
//!
//! Executes Overpass QL queries against the API and decodes the response
//! into domain elements. Decoding is fail-closed per element: entries the
//! decoder does not recognize are skipped, never fatal.

use async_trait::async_trait;
use domain::elements::Element;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::OverpassConfig;
use crate::error::OverpassError;
use crate::query::QuerySpec;

/// Client trait for executing Overpass queries
#[async_trait]
pub trait OverpassClient: Send + Sync {
    /// Execute a query and return the decoded elements
    async fn execute(&self, spec: &QuerySpec) -> Result<Vec<Element>, OverpassError>;

    /// Check if the Overpass API is reachable
    async fn is_healthy(&self) -> bool;
}

/// Wire shape of an Overpass JSON response
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    elements: Vec<serde_json::Value>,
}

/// HTTP implementation of the Overpass client
#[derive(Debug)]
pub struct HttpOverpassClient {
    client: Client,
    config: OverpassConfig,
}

impl HttpOverpassClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: OverpassConfig) -> Result<Self, OverpassError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| OverpassError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, OverpassError> {
        Self::new(OverpassConfig::default())
    }

    /// Decode each element independently, skipping entries that fail.
    ///
    /// The API mixes tagged nodes, bare skeleton nodes, ways and relations
    /// in one array; a malformed or unknown entry must not poison the rest
    /// of the response.
    fn decode_elements(raw: Vec<serde_json::Value>) -> Vec<Element> {
        raw.into_iter()
            .filter_map(|value| match serde_json::from_value::<Element>(value) {
                Ok(element) => Some(element),
                Err(e) => {
                    debug!(error = %e, "Skipping undecodable element");
                    None
                },
            })
            .collect()
    }
}

#[async_trait]
impl OverpassClient for HttpOverpassClient {
    #[instrument(skip_all)]
    async fn execute(&self, spec: &QuerySpec) -> Result<Vec<Element>, OverpassError> {
        let url = format!("{}/interpreter", self.config.base_url);
        let ql = spec.to_ql();
        debug!(query = %ql, post = spec.uses_post(), "Executing Overpass query");

        let request = if spec.uses_post() {
            self.client.post(&url).form(&[("data", ql.as_str())])
        } else {
            self.client.get(&url).query(&[("data", ql.as_str())])
        };

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                OverpassError::ConnectionFailed(e.to_string())
            } else {
                OverpassError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OverpassError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OverpassError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(OverpassError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| OverpassError::ParseError(e.to_string()))?;

        let elements = Self::decode_elements(api_response.elements);
        debug!(count = elements.len(), "Overpass query decoded");
        Ok(elements)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/status", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
