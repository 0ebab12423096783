//! Port adapters over the integration crates

mod overpass_adapter;

pub use overpass_adapter::OverpassAdapter;
