//! SQLite tag store

use application::error::ApplicationError;
use application::ports::{NewTag, TagStorePort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::entities::Tag;
use sqlx::FromRow;
use tracing::{debug, instrument, warn};

use super::{Database, map_sqlx_error};

/// Tag store backed by the shared SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteTagStore {
    db: Database,
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    lat: f64,
    lon: f64,
    title: String,
    comment: String,
    images: String,
    created_at: DateTime<Utc>,
}

impl TagRow {
    fn into_tag(self) -> Tag {
        let images = serde_json::from_str(&self.images).unwrap_or_else(|e| {
            warn!(id = self.id, error = %e, "Invalid images column, treating as empty");
            Vec::new()
        });
        Tag {
            id: self.id,
            lat: self.lat,
            lon: self.lon,
            title: self.title,
            comment: self.comment,
            images,
            created_at: self.created_at,
        }
    }
}

impl SqliteTagStore {
    /// Create a new tag store over the shared database
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagStorePort for SqliteTagStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Tag>, ApplicationError> {
        let rows: Vec<TagRow> = sqlx::query_as(
            "SELECT id, lat, lon, title, comment, images, created_at \
             FROM tags ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(TagRow::into_tag).collect())
    }

    #[instrument(skip(self, tag))]
    async fn insert(&self, tag: NewTag) -> Result<Tag, ApplicationError> {
        let images = serde_json::to_string(&tag.images)
            .map_err(|e| ApplicationError::Internal(format!("Cannot encode images: {e}")))?;
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO tags (lat, lon, title, comment, images, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(tag.lat)
        .bind(tag.lon)
        .bind(&tag.title)
        .bind(&tag.comment)
        .bind(&images)
        .bind(created_at)
        .execute(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        let id = result.last_insert_rowid();
        debug!(id, "Tag inserted");

        Ok(Tag {
            id,
            lat: tag.lat,
            lon: tag.lon,
            title: tag.title,
            comment: tag.comment,
            images: tag.images,
            created_at,
        })
    }

    async fn ping(&self) -> Result<(), ApplicationError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}
