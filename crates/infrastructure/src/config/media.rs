//! Image storage configuration.

use serde::{Deserialize, Serialize};

/// Image storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Directory where uploaded images are stored
    #[serde(default = "default_directory")]
    pub directory: String,
}

fn default_directory() -> String {
    "data/images".to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}
