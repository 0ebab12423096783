//! Application services
//!
//! Services orchestrate the ports and the domain geometry resolver. Handlers
//! in the presentation layer call into these; nothing here touches HTTP or
//! storage directly.

pub mod annotation_service;
pub mod poi_service;

pub use annotation_service::{AnnotationService, TagSubmission};
pub use poi_service::{MapView, PoiService};
