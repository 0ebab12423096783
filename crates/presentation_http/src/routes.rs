//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Map API (v1)
        .route("/v1/map", get(handlers::map::map_view))
        .route("/v1/points/{category}", get(handlers::points::category_points))
        // Annotation API (v1)
        .route(
            "/v1/tags",
            get(handlers::tags::list_tags).post(handlers::tags::submit_tag),
        )
        .route("/v1/comments", post(handlers::comments::submit_comment))
        .route("/v1/images/{name}", get(handlers::images::get_image))
        // API documentation
        .merge(openapi::create_openapi_routes())
        // Attach state
        .with_state(state)
}
