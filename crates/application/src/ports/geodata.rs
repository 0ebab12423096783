//! Geodata service port

use async_trait::async_trait;
use domain::elements::Element;
use domain::value_objects::{BoundingBox, TagFilter};

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Which element kinds a geodata query selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySelector {
    /// Nodes only
    NodeOnly,
    /// Nodes, ways and relations in a single statement
    NodeWayRelation,
    /// Union of ways and relations, with referenced nodes recursed in
    WayRelationUnion,
}

/// A geodata query: element selector, tag filters and spatial bounds
#[derive(Debug, Clone)]
pub struct GeodataQuery {
    /// Element kinds to select
    pub selector: QuerySelector,
    /// Tag filters; multiple filters select the union of matching elements
    pub filters: Vec<TagFilter>,
    /// Spatial bounds of the query
    pub bbox: BoundingBox,
}

impl GeodataQuery {
    /// Create a query over the given selector and bounds
    #[must_use]
    pub fn new(selector: QuerySelector, filters: Vec<TagFilter>, bbox: BoundingBox) -> Self {
        Self {
            selector,
            filters,
            bbox,
        }
    }
}

/// Port for fetching map elements from a geodata service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeodataPort: Send + Sync {
    /// Fetch all elements matching the query
    async fn query(&self, query: GeodataQuery) -> Result<Vec<Element>, ApplicationError>;

    /// Check if the geodata service is reachable
    async fn is_healthy(&self) -> bool;
}
