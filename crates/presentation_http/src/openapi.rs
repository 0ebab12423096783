//! OpenAPI documentation module
//!
//! Provides OpenAPI 3.0 documentation for the Waymark HTTP API.
//! Includes Swagger UI and ReDoc for interactive API exploration.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::{Router, response::Html, routing::get};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for Waymark
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Waymark API",
        version = "0.1.0",
        description = "Map annotation service with OpenStreetMap points of interest",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check and readiness endpoints"),
        (name = "map", description = "Aggregate map view"),
        (name = "points", description = "Points of interest by category"),
        (name = "tags", description = "User-submitted map tags"),
        (name = "comments", description = "Standalone comments"),
        (name = "images", description = "Stored tag images")
    ),
    paths(
        // Health endpoints
        handlers::health::health_check,
        handlers::health::readiness_check,
        // Map endpoints
        handlers::map::map_view,
        handlers::points::category_points,
        // Annotation endpoints
        handlers::tags::list_tags,
        handlers::tags::submit_tag,
        handlers::comments::submit_comment,
        handlers::images::get_image,
    ),
    components(
        schemas(
            // Health schemas
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::ServiceStatus,
            // Map schemas
            handlers::map::PointDto,
            handlers::map::TagResponse,
            handlers::map::MapViewResponse,
            handlers::points::PointsResponse,
            // Annotation schemas
            handlers::tags::TagListResponse,
            handlers::comments::CommentRequest,
            handlers::comments::CommentResponse,
            // Error schemas
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
///
/// Adds the following routes:
/// - `/api-docs/openapi.json` - OpenAPI specification (used by Swagger UI)
/// - `/swagger-ui/*` - Swagger UI interactive documentation
/// - `/redoc` - ReDoc documentation
pub fn create_openapi_routes() -> Router<AppState> {
    let redoc = Redoc::with_url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        // ReDoc documentation
        .route("/redoc", get(|| async move { Html(redoc.to_html()) }))
        // Swagger UI with assets - SwaggerUi will serve /api-docs/openapi.json internally
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_is_valid() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&doc).expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("Waymark API"));
        assert!(json.contains("/health"));
        assert!(json.contains("/v1/map"));
        assert!(json.contains("/v1/points/{category}"));
    }

    #[test]
    fn openapi_has_all_tags() {
        let doc = ApiDoc::openapi();
        let tags: Vec<&str> = doc
            .tags
            .as_ref()
            .map(|t| t.iter().map(|tag| tag.name.as_str()).collect())
            .unwrap_or_default();

        assert!(tags.contains(&"health"));
        assert!(tags.contains(&"map"));
        assert!(tags.contains(&"points"));
        assert!(tags.contains(&"tags"));
        assert!(tags.contains(&"comments"));
        assert!(tags.contains(&"images"));
    }
}
