//! User-submitted map annotation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pin dropped on the map by a user, with a title, a comment, and zero
/// or more uploaded photos.
///
/// Created by a submission, read by the map load path, never mutated or
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Store-assigned identity
    pub id: i64,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Short title shown on the pin
    pub title: String,
    /// Free-form comment
    pub comment: String,
    /// Storage paths of uploaded images, in upload order
    pub images: Vec<String>,
    /// When the tag was created
    pub created_at: DateTime<Utc>,
}
