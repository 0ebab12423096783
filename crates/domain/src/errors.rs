//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude out of range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Bounding box is malformed (out-of-range or inverted corners)
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// Unknown point-of-interest category name
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
