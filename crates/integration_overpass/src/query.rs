//! Overpass QL query construction

use domain::value_objects::{BoundingBox, TagFilter};
use std::fmt::Write;

/// Which element kinds a query statement selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Nodes only
    Node,
    /// Nodes, ways and relations in one `nwr` statement
    NodeWayRelation,
    /// Union of way and relation statements
    WayRelation,
}

/// A complete Overpass query: selector, tag filters and bounding box
#[derive(Debug, Clone)]
pub struct QuerySpec {
    /// Element kinds to select
    pub selector: Selector,
    /// Tag filters; multiple filters form a union block
    pub filters: Vec<TagFilter>,
    /// Spatial bounds
    pub bbox: BoundingBox,
}

impl QuerySpec {
    /// Create a new query spec
    #[must_use]
    pub fn new(selector: Selector, filters: Vec<TagFilter>, bbox: BoundingBox) -> Self {
        Self {
            selector,
            filters,
            bbox,
        }
    }

    /// Union queries are sent as a POST form; single statements as GET
    #[must_use]
    pub const fn uses_post(&self) -> bool {
        matches!(self.selector, Selector::WayRelation)
    }

    /// Render the Overpass QL string for this query.
    ///
    /// Node-only queries need no recursion and end with a bare `out;`. The
    /// other shapes recurse into referenced nodes (`>`) so way geometry can
    /// be resolved client-side from the skeleton output.
    #[must_use]
    pub fn to_ql(&self) -> String {
        let bbox = self.bbox.to_string();
        let mut ql = String::from("[out:json];");

        match self.selector {
            Selector::Node => {
                self.write_statements(&mut ql, &bbox, &["node"]);
                ql.push_str("out;");
            },
            Selector::NodeWayRelation => {
                self.write_statements(&mut ql, &bbox, &["nwr"]);
                ql.push_str("out body;>;out skel qt;");
            },
            Selector::WayRelation => {
                self.write_statements(&mut ql, &bbox, &["way", "relation"]);
                ql.push_str("out body;>;out skel qt;");
            },
        }

        ql
    }

    /// Write the filter statements, wrapping them in a union block when more
    /// than one statement results.
    fn write_statements(&self, ql: &mut String, bbox: &str, kinds: &[&str]) {
        let union = self.filters.len() * kinds.len() > 1;
        if union {
            ql.push('(');
        }
        for filter in &self.filters {
            for kind in kinds {
                let _ = write!(
                    ql,
                    "{kind}[\"{}\"=\"{}\"]({bbox});",
                    filter.key, filter.value
                );
            }
        }
        if union {
            ql.push_str(");");
        }
    }
}
