//! Tag store port

use async_trait::async_trait;
use domain::entities::Tag;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A tag as accepted from a submitter, before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewTag {
    /// Latitude of the annotated location
    pub lat: f64,
    /// Longitude of the annotated location
    pub lon: f64,
    /// Short title
    pub title: String,
    /// Free-form comment
    pub comment: String,
    /// Stored file names of attached images
    pub images: Vec<String>,
}

/// Port for persisting and listing tags
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TagStorePort: Send + Sync {
    /// List all tags, newest first
    async fn list(&self) -> Result<Vec<Tag>, ApplicationError>;

    /// Insert a new tag and return it with its assigned id
    async fn insert(&self, tag: NewTag) -> Result<Tag, ApplicationError>;

    /// Check that the backing store answers queries
    async fn ping(&self) -> Result<(), ApplicationError>;
}
