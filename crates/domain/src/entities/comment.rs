//! Standalone user comment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-form comment submitted from the map page. Insert-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Store-assigned identity
    pub id: i64,
    /// Comment body
    pub body: String,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
}
