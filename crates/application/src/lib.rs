//! Application layer for Waymark
//!
//! Defines the ports to external collaborators (geodata service, annotation
//! store, image store) and the services orchestrating them around the
//! domain's geometry resolver.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{AnnotationService, MapView, PoiService, TagSubmission};
