//! Overpass API and map viewport configuration.

use domain::DomainError;
use domain::value_objects::BoundingBox;
use integration_overpass::OverpassConfig;
use serde::{Deserialize, Serialize};

/// Bounding box configuration for the map viewport
///
/// Defaults to the Lisbon city box the map was built around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BboxConfig {
    /// Southern latitude bound
    #[serde(default = "default_south")]
    pub south: f64,
    /// Western longitude bound
    #[serde(default = "default_west")]
    pub west: f64,
    /// Northern latitude bound
    #[serde(default = "default_north")]
    pub north: f64,
    /// Eastern longitude bound
    #[serde(default = "default_east")]
    pub east: f64,
}

const fn default_south() -> f64 {
    38.6
}

const fn default_west() -> f64 {
    -9.3
}

const fn default_north() -> f64 {
    38.8
}

const fn default_east() -> f64 {
    -9.0
}

impl Default for BboxConfig {
    fn default() -> Self {
        Self {
            south: default_south(),
            west: default_west(),
            north: default_north(),
            east: default_east(),
        }
    }
}

/// Overpass API configuration with the map viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassAppConfig {
    /// Overpass API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for Overpass requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Map viewport queried for points of interest
    #[serde(default)]
    pub bbox: BboxConfig,
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

impl Default for OverpassAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            bbox: BboxConfig::default(),
        }
    }
}

impl OverpassAppConfig {
    /// Convert to the integration crate's client configuration
    #[must_use]
    pub fn to_client_config(&self) -> OverpassConfig {
        OverpassConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone(),
        }
    }

    /// Build the validated viewport bounding box
    pub fn bbox(&self) -> Result<BoundingBox, DomainError> {
        BoundingBox::new(self.bbox.south, self.bbox.west, self.bbox.north, self.bbox.east)
    }
}
