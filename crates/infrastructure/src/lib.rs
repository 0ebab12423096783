//! Infrastructure layer for Waymark
//!
//! Concrete implementations of the application ports: configuration
//! loading, SQLite persistence, filesystem image storage, and the Overpass
//! geodata adapter.

pub mod adapters;
pub mod config;
pub mod media;
pub mod persistence;

pub use adapters::OverpassAdapter;
pub use config::AppConfig;
pub use media::FsImageStore;
pub use persistence::{Database, SqliteCommentStore, SqliteTagStore};
