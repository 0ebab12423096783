//! Application state shared across handlers

use std::sync::Arc;

use application::{AnnotationService, PoiService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Point-of-interest fetching service
    pub poi_service: Arc<PoiService>,
    /// Annotation submission and retrieval service
    pub annotation_service: Arc<AnnotationService>,
}
