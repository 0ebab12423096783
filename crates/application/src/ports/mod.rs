//! Port definitions for external dependencies
//!
//! Ports are trait abstractions over outbound collaborators. Implementations
//! live in the infrastructure layer; services depend only on these traits.

pub mod comment_store;
pub mod geodata;
pub mod image_store;
pub mod tag_store;

pub use comment_store::CommentStorePort;
pub use geodata::{GeodataPort, GeodataQuery, QuerySelector};
pub use image_store::{ImageStorePort, ImageUpload};
pub use tag_store::{NewTag, TagStorePort};
