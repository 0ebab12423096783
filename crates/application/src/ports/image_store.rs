//! Image store port

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// An uploaded image file, as received from a submitter
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// File name as supplied by the submitter
    pub file_name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

/// Port for storing and retrieving image files
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageStorePort: Send + Sync {
    /// Store an uploaded image, returning the name it was stored under
    async fn store(&self, upload: ImageUpload) -> Result<String, ApplicationError>;

    /// Retrieve a stored image by name, or `None` if no such image exists
    async fn retrieve(&self, name: &str) -> Result<Option<Vec<u8>>, ApplicationError>;
}
