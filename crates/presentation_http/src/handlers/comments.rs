//! Standalone comment handler

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Comment submission body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentRequest {
    /// Comment text
    pub comment: String,
}

/// A persisted comment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Submit a standalone comment
#[utoipa::path(
    post,
    path = "/v1/comments",
    tag = "comments",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Empty comment", body = crate::error::ErrorResponse)
    )
)]
pub async fn submit_comment(
    State(state): State<AppState>,
    Json(request): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let comment = state.annotation_service.add_comment(&request.comment).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            id: comment.id,
            comment: comment.body,
            created_at: comment.created_at,
        }),
    ))
}
