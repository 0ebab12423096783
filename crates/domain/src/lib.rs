//! Domain layer for Waymark
//!
//! Contains core business logic: map-graph element types, the geometry
//! resolver, persisted annotation entities, and domain errors. This layer
//! has no I/O and no external service dependencies.

pub mod elements;
pub mod entities;
pub mod errors;
pub mod geometry;
pub mod value_objects;

pub use elements::{Element, ElementId, Member, MemberKind, Node, Relation, Way};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
