//! Aggregate map view handler

use application::services::MapView;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use domain::entities::Tag;
use domain::value_objects::Point;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// A map point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct PointDto {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl From<Point> for PointDto {
    fn from(point: Point) -> Self {
        Self {
            lat: point.lat,
            lon: point.lon,
        }
    }
}

/// A user-submitted tag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagResponse {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub title: String,
    pub comment: String,
    /// Stored image names, servable via `/v1/images/{name}`
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            lat: tag.lat,
            lon: tag.lon,
            title: tag.title,
            comment: tag.comment,
            images: tag.images,
            created_at: tag.created_at,
        }
    }
}

/// Everything the map needs on initial load
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapViewResponse {
    pub water: Vec<PointDto>,
    pub fountains: Vec<PointDto>,
    pub malls: Vec<PointDto>,
    pub parks: Vec<PointDto>,
    pub tags: Vec<TagResponse>,
}

impl From<MapView> for MapViewResponse {
    fn from(view: MapView) -> Self {
        Self {
            water: view.water.into_iter().map(PointDto::from).collect(),
            fountains: view.fountains.into_iter().map(PointDto::from).collect(),
            malls: view.malls.into_iter().map(PointDto::from).collect(),
            parks: view.parks.into_iter().map(PointDto::from).collect(),
            tags: view.tags.into_iter().map(TagResponse::from).collect(),
        }
    }
}

/// Aggregate map load: all category points plus persisted tags
#[utoipa::path(
    get,
    path = "/v1/map",
    tag = "map",
    responses(
        (status = 200, description = "Map view assembled", body = MapViewResponse),
        (status = 500, description = "Tag store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn map_view(State(state): State<AppState>) -> Result<Json<MapViewResponse>, ApiError> {
    let view = state.poi_service.map_view().await?;
    Ok(Json(MapViewResponse::from(view)))
}
