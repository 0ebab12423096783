//! Tag submission and listing handlers

use application::ports::ImageUpload;
use application::services::TagSubmission;
use axum::{
    Json,
    extract::{Multipart, State, multipart::Field},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, handlers::map::TagResponse, state::AppState};

/// All persisted tags
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagListResponse {
    pub tags: Vec<TagResponse>,
}

/// List all tags, newest first
#[utoipa::path(
    get,
    path = "/v1/tags",
    tag = "tags",
    responses(
        (status = 200, description = "All tags", body = TagListResponse)
    )
)]
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<TagListResponse>, ApiError> {
    let tags = state.annotation_service.list_tags().await?;
    Ok(Json(TagListResponse {
        tags: tags.into_iter().map(TagResponse::from).collect(),
    }))
}

/// Submit a new tag as a multipart form.
///
/// Text parts `lat`, `lon`, `title` and `comment` are required; any number
/// of `images` file parts may follow.
#[utoipa::path(
    post,
    path = "/v1/tags",
    tag = "tags",
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse)
    )
)]
pub async fn submit_tag(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<TagResponse>), ApiError> {
    let mut submission = TagSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        match name.as_str() {
            "lat" => submission.lat = Some(text_part(field).await?),
            "lon" => submission.lon = Some(text_part(field).await?),
            "title" => submission.title = Some(text_part(field).await?),
            "comment" => submission.comment = Some(text_part(field).await?),
            "images" => {
                let file_name = field.file_name().unwrap_or("upload.bin").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid image part: {e}")))?
                    .to_vec();
                submission.images.push(ImageUpload { file_name, bytes });
            },
            _ => {},
        }
    }

    let tag = state.annotation_service.submit_tag(submission).await?;
    Ok((StatusCode::CREATED, Json(TagResponse::from(tag))))
}

async fn text_part(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid form field: {e}")))
}
