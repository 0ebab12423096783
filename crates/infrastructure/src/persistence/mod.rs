//! SQLite persistence
//!
//! All stores share the async sqlx pool owned by [`Database`]. Migrations
//! are managed via sqlx's `migrate!()` macro using SQL files in the
//! workspace `migrations/` directory.

mod comment_store;
mod database;
mod tag_store;

pub use comment_store::SqliteCommentStore;
pub use database::{Database, DatabaseError};
pub use tag_store::SqliteTagStore;

use application::error::ApplicationError;

/// Map a sqlx error to an application error
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> ApplicationError {
    match err {
        sqlx::Error::RowNotFound => ApplicationError::NotFound("row not found".to_string()),
        other => ApplicationError::Internal(format!("Database error: {other}")),
    }
}
