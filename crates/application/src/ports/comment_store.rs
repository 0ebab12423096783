//! Comment store port

use async_trait::async_trait;
use domain::entities::Comment;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting standalone comments
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommentStorePort: Send + Sync {
    /// Insert a comment and return it with its assigned id
    async fn insert(&self, body: String) -> Result<Comment, ApplicationError>;

    /// List all comments, newest first
    async fn list(&self) -> Result<Vec<Comment>, ApplicationError>;
}
