//! Annotation service
//!
//! Handles user-submitted map annotations: tag submission with image
//! attachments, tag listing, standalone comments, and image retrieval.

use std::{fmt, sync::Arc};

use domain::DomainError;
use domain::entities::{Comment, Tag};
use domain::value_objects::Point;
use futures::future::try_join_all;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CommentStorePort, ImageStorePort, ImageUpload, NewTag, TagStorePort},
};

/// A tag submission as received from the form, before validation
#[derive(Debug, Default)]
pub struct TagSubmission {
    /// Latitude field, as submitted
    pub lat: Option<String>,
    /// Longitude field, as submitted
    pub lon: Option<String>,
    /// Title field
    pub title: Option<String>,
    /// Comment field
    pub comment: Option<String>,
    /// Attached image files
    pub images: Vec<ImageUpload>,
}

/// Service for user-submitted annotations
pub struct AnnotationService {
    tag_store: Arc<dyn TagStorePort>,
    comment_store: Arc<dyn CommentStorePort>,
    image_store: Arc<dyn ImageStorePort>,
}

impl fmt::Debug for AnnotationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationService").finish_non_exhaustive()
    }
}

impl Clone for AnnotationService {
    fn clone(&self) -> Self {
        Self {
            tag_store: Arc::clone(&self.tag_store),
            comment_store: Arc::clone(&self.comment_store),
            image_store: Arc::clone(&self.image_store),
        }
    }
}

impl AnnotationService {
    /// Create a new annotation service
    #[must_use]
    pub fn new(
        tag_store: Arc<dyn TagStorePort>,
        comment_store: Arc<dyn CommentStorePort>,
        image_store: Arc<dyn ImageStorePort>,
    ) -> Self {
        Self {
            tag_store,
            comment_store,
            image_store,
        }
    }

    /// Validate and persist a tag submission.
    ///
    /// All four text fields must be present and non-empty; coordinates must
    /// parse and lie in range. Zero-byte image parts are dropped. Remaining
    /// images are stored as a batch before the tag row is inserted; a failed
    /// upload fails the submission without rolling back earlier uploads.
    #[instrument(skip(self, submission))]
    pub async fn submit_tag(&self, submission: TagSubmission) -> Result<Tag, ApplicationError> {
        let (lat_raw, lon_raw, title, comment) = match (
            non_empty(submission.lat),
            non_empty(submission.lon),
            non_empty(submission.title),
            non_empty(submission.comment),
        ) {
            (Some(lat), Some(lon), Some(title), Some(comment)) => (lat, lon, title, comment),
            _ => {
                return Err(DomainError::ValidationError(
                    "All fields are required".to_string(),
                )
                .into());
            },
        };

        let lat: f64 = lat_raw.parse().map_err(|_| {
            DomainError::ValidationError("Invalid coordinates".to_string())
        })?;
        let lon: f64 = lon_raw.parse().map_err(|_| {
            DomainError::ValidationError("Invalid coordinates".to_string())
        })?;
        let location = Point::validated(lat, lon)?;

        let uploads: Vec<ImageUpload> = submission
            .images
            .into_iter()
            .filter(|upload| !upload.bytes.is_empty())
            .collect();

        let stored = try_join_all(
            uploads
                .into_iter()
                .map(|upload| self.image_store.store(upload)),
        )
        .await?;

        let tag = self
            .tag_store
            .insert(NewTag {
                lat: location.lat,
                lon: location.lon,
                title,
                comment,
                images: stored,
            })
            .await?;

        info!(id = tag.id, images = tag.images.len(), "Tag created");
        Ok(tag)
    }

    /// List all persisted tags
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApplicationError> {
        self.tag_store.list().await
    }

    /// Persist a standalone comment; empty bodies are rejected
    #[instrument(skip(self, body))]
    pub async fn add_comment(&self, body: &str) -> Result<Comment, ApplicationError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(DomainError::ValidationError("Comment is required".to_string()).into());
        }

        let comment = self.comment_store.insert(body.to_string()).await?;
        debug!(id = comment.id, "Comment created");
        Ok(comment)
    }

    /// Check that the annotation store answers queries
    pub async fn store_ready(&self) -> bool {
        self.tag_store.ping().await.is_ok()
    }

    /// Fetch a stored image by name
    #[instrument(skip(self))]
    pub async fn fetch_image(&self, name: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        let bytes = self.image_store.retrieve(name).await?;
        if bytes.is_none() {
            warn!(%name, "Image not found");
        }
        Ok(bytes)
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::comment_store::MockCommentStorePort;
    use crate::ports::image_store::MockImageStorePort;
    use crate::ports::tag_store::MockTagStorePort;
    use chrono::Utc;

    fn service(
        tag_store: MockTagStorePort,
        comment_store: MockCommentStorePort,
        image_store: MockImageStorePort,
    ) -> AnnotationService {
        AnnotationService::new(
            Arc::new(tag_store),
            Arc::new(comment_store),
            Arc::new(image_store),
        )
    }

    fn submission() -> TagSubmission {
        TagSubmission {
            lat: Some("38.7".to_string()),
            lon: Some("-9.1".to_string()),
            title: Some("Viewpoint".to_string()),
            comment: Some("Great at sunset".to_string()),
            images: vec![],
        }
    }

    fn stored_tag(new: &NewTag) -> Tag {
        Tag {
            id: 7,
            lat: new.lat,
            lon: new.lon,
            title: new.title.clone(),
            comment: new.comment.clone(),
            images: new.images.clone(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn submit_tag_persists_valid_submission() {
        let mut tag_store = MockTagStorePort::new();
        tag_store
            .expect_insert()
            .withf(|new| new.title == "Viewpoint" && (new.lat - 38.7).abs() < f64::EPSILON)
            .times(1)
            .returning(|new| Ok(stored_tag(&new)));

        let svc = service(
            tag_store,
            MockCommentStorePort::new(),
            MockImageStorePort::new(),
        );
        let tag = svc.submit_tag(submission()).await.unwrap();
        assert_eq!(tag.id, 7);
    }

    #[tokio::test]
    async fn submit_tag_rejects_missing_fields() {
        let svc = service(
            MockTagStorePort::new(),
            MockCommentStorePort::new(),
            MockImageStorePort::new(),
        );

        for broken in [
            TagSubmission {
                lat: None,
                ..submission()
            },
            TagSubmission {
                lon: Some("   ".to_string()),
                ..submission()
            },
            TagSubmission {
                title: Some(String::new()),
                ..submission()
            },
            TagSubmission {
                comment: None,
                ..submission()
            },
        ] {
            let err = svc.submit_tag(broken).await.unwrap_err();
            assert!(err.to_string().contains("All fields are required"));
        }
    }

    #[tokio::test]
    async fn submit_tag_rejects_unparseable_coordinates() {
        let svc = service(
            MockTagStorePort::new(),
            MockCommentStorePort::new(),
            MockImageStorePort::new(),
        );

        let broken = TagSubmission {
            lat: Some("north-ish".to_string()),
            ..submission()
        };
        let err = svc.submit_tag(broken).await.unwrap_err();
        assert!(err.to_string().contains("Invalid coordinates"));
    }

    #[tokio::test]
    async fn submit_tag_rejects_out_of_range_coordinates() {
        let svc = service(
            MockTagStorePort::new(),
            MockCommentStorePort::new(),
            MockImageStorePort::new(),
        );

        let broken = TagSubmission {
            lat: Some("123.0".to_string()),
            ..submission()
        };
        assert!(svc.submit_tag(broken).await.is_err());
    }

    #[tokio::test]
    async fn submit_tag_stores_images_and_drops_empty_parts() {
        let mut image_store = MockImageStorePort::new();
        image_store
            .expect_store()
            .withf(|upload| upload.file_name == "photo.jpg")
            .times(1)
            .returning(|_| Ok("abc123.jpg".to_string()));

        let mut tag_store = MockTagStorePort::new();
        tag_store
            .expect_insert()
            .withf(|new| new.images == vec!["abc123.jpg".to_string()])
            .times(1)
            .returning(|new| Ok(stored_tag(&new)));

        let svc = service(tag_store, MockCommentStorePort::new(), image_store);
        let tag = svc
            .submit_tag(TagSubmission {
                images: vec![
                    ImageUpload {
                        file_name: "photo.jpg".to_string(),
                        bytes: vec![0xFF, 0xD8],
                    },
                    ImageUpload {
                        file_name: "empty.png".to_string(),
                        bytes: vec![],
                    },
                ],
                ..submission()
            })
            .await
            .unwrap();

        assert_eq!(tag.images, vec!["abc123.jpg".to_string()]);
    }

    #[tokio::test]
    async fn submit_tag_fails_when_an_upload_fails() {
        let mut image_store = MockImageStorePort::new();
        image_store
            .expect_store()
            .returning(|_| Err(ApplicationError::Internal("disk full".to_string())));

        let svc = service(
            MockTagStorePort::new(),
            MockCommentStorePort::new(),
            image_store,
        );
        let result = svc
            .submit_tag(TagSubmission {
                images: vec![ImageUpload {
                    file_name: "photo.jpg".to_string(),
                    bytes: vec![1, 2, 3],
                }],
                ..submission()
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn add_comment_rejects_empty_body() {
        let svc = service(
            MockTagStorePort::new(),
            MockCommentStorePort::new(),
            MockImageStorePort::new(),
        );

        let err = svc.add_comment("   ").await.unwrap_err();
        assert!(err.to_string().contains("Comment is required"));
    }

    #[tokio::test]
    async fn add_comment_trims_and_inserts() {
        let mut comment_store = MockCommentStorePort::new();
        comment_store
            .expect_insert()
            .withf(|body| body == "Lovely spot")
            .times(1)
            .returning(|body| {
                Ok(Comment {
                    id: 3,
                    body,
                    created_at: Utc::now(),
                })
            });

        let svc = service(
            MockTagStorePort::new(),
            comment_store,
            MockImageStorePort::new(),
        );
        let comment = svc.add_comment("  Lovely spot  ").await.unwrap();
        assert_eq!(comment.id, 3);
    }

    #[tokio::test]
    async fn fetch_image_passes_through() {
        let mut image_store = MockImageStorePort::new();
        image_store
            .expect_retrieve()
            .withf(|name| name == "abc123.jpg")
            .times(1)
            .returning(|_| Ok(Some(vec![0xFF, 0xD8])));

        let svc = service(
            MockTagStorePort::new(),
            MockCommentStorePort::new(),
            image_store,
        );
        let bytes = svc.fetch_image("abc123.jpg").await.unwrap();
        assert_eq!(bytes, Some(vec![0xFF, 0xD8]));
    }

    #[tokio::test]
    async fn fetch_image_reports_missing_as_none() {
        let mut image_store = MockImageStorePort::new();
        image_store.expect_retrieve().returning(|_| Ok(None));

        let svc = service(
            MockTagStorePort::new(),
            MockCommentStorePort::new(),
            image_store,
        );
        assert!(svc.fetch_image("ghost.png").await.unwrap().is_none());
    }
}
