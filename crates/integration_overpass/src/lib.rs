//! Overpass API integration
//!
//! HTTP client for the Overpass API, the public query endpoint over
//! OpenStreetMap data. Queries are rendered as Overpass QL and responses
//! decoded into the domain's element types.

pub mod client;
pub mod config;
pub mod error;
pub mod query;

pub use client::{HttpOverpassClient, OverpassClient};
pub use config::OverpassConfig;
pub use error::OverpassError;
pub use query::{QuerySpec, Selector};
