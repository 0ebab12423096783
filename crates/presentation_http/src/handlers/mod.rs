//! HTTP request handlers

pub mod comments;
pub mod health;
pub mod images;
pub mod map;
pub mod points;
pub mod tags;
