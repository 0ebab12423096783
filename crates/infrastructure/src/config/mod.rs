//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `overpass`: Overpass API client settings and the map viewport
//! - `media`: image storage settings

mod database;
mod media;
mod overpass;
mod server;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use media::MediaConfig;
pub use overpass::{BboxConfig, OverpassAppConfig};
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Overpass API configuration
    #[serde(default)]
    pub overpass: OverpassAppConfig,

    /// Image storage configuration
    #[serde(default)]
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`, and
    /// `WAYMARK_*` environment variable overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("WAYMARK")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "waymark.db");
        assert_eq!(config.overpass.base_url, "https://overpass-api.de/api");
    }

    #[test]
    fn app_config_deserialization_keeps_defaults() {
        let json = r#"{"server":{"port":8080}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.media.directory, "data/images");
    }

    #[test]
    fn app_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("server"));
        assert!(json.contains("database"));
        assert!(json.contains("overpass"));
        assert!(json.contains("media"));
    }

    #[test]
    fn config_clone() {
        let config = AppConfig::default();
        #[allow(clippy::redundant_clone)]
        let cloned = config.clone();
        assert_eq!(config.server.port, cloned.server.port);
    }
}
