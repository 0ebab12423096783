//! Value objects for the Waymark domain

mod bounding_box;
mod point;
mod poi_category;

pub use bounding_box::BoundingBox;
pub use point::Point;
pub use poi_category::{PoiCategory, TagFilter};
