//! SQLite comment store

use application::error::ApplicationError;
use application::ports::CommentStorePort;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::entities::Comment;
use sqlx::FromRow;
use tracing::{debug, instrument};

use super::{Database, map_sqlx_error};

/// Comment store backed by the shared SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteCommentStore {
    db: Database,
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            body: row.body,
            created_at: row.created_at,
        }
    }
}

impl SqliteCommentStore {
    /// Create a new comment store over the shared database
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentStorePort for SqliteCommentStore {
    #[instrument(skip(self, body))]
    async fn insert(&self, body: String) -> Result<Comment, ApplicationError> {
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO comments (body, created_at) VALUES ($1, $2)")
            .bind(&body)
            .bind(created_at)
            .execute(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        let id = result.last_insert_rowid();
        debug!(id, "Comment inserted");

        Ok(Comment {
            id,
            body,
            created_at,
        })
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Comment>, ApplicationError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            "SELECT id, body, created_at FROM comments ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}
