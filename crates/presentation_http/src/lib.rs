//! HTTP presentation layer for Waymark
//!
//! Axum router, handlers and OpenAPI documentation for the map annotation
//! API.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
