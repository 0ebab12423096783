//! Overpass client configuration

use serde::{Deserialize, Serialize};

use crate::error::OverpassError;

/// Overpass API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Overpass API base URL (default: <https://overpass-api.de/api>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request (default: "waymark/0.1")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://overpass-api.de/api".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "waymark/0.1".to_string()
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl OverpassConfig {
    /// Configuration pointed at a test server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            user_agent: "waymark-test/0.1".to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), OverpassError> {
        if self.base_url.is_empty() {
            return Err(OverpassError::ConnectionFailed(
                "base_url must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(OverpassError::ConnectionFailed(
                "timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
