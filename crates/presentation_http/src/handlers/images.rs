//! Stored image retrieval handler

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::ApiError, state::AppState};

/// Content type for a stored image, derived from its preserved extension
fn content_type_for(name: &str) -> &'static str {
    match name.rsplit('.').next() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Serve a stored image by name
#[utoipa::path(
    get,
    path = "/v1/images/{name}",
    tag = "images",
    params(
        ("name" = String, Path, description = "Stored image name")
    ),
    responses(
        (status = 200, description = "Image bytes"),
        (status = 404, description = "No such image", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let Some(bytes) = state.annotation_service.fetch_image(&name).await? else {
        return Err(ApiError::NotFound(format!("No image named {name}")));
    };

    Ok(([(header::CONTENT_TYPE, content_type_for(&name))], bytes).into_response())
}
