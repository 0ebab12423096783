//! Single-category points handler

use axum::{
    Json,
    extract::{Path, State},
};
use domain::value_objects::PoiCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, handlers::map::PointDto, state::AppState};

/// Points of one category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    /// Category slug
    pub category: String,
    /// Resolved points
    pub points: Vec<PointDto>,
}

/// Points for a single category (`water`, `fountains`, `malls`, `parks`)
#[utoipa::path(
    get,
    path = "/v1/points/{category}",
    tag = "points",
    params(
        ("category" = String, Path, description = "Category slug: water, fountains, malls or parks")
    ),
    responses(
        (status = 200, description = "Points for the category", body = PointsResponse),
        (status = 400, description = "Unknown category", body = crate::error::ErrorResponse)
    )
)]
pub async fn category_points(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let category: PoiCategory = category
        .parse()
        .map_err(|e: domain::DomainError| ApiError::BadRequest(e.to_string()))?;

    let points = state.poi_service.points_for(category).await;
    Ok(Json(PointsResponse {
        category: category.slug().to_string(),
        points: points.into_iter().map(PointDto::from).collect(),
    }))
}
