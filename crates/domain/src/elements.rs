//! Raw map-graph element types
//!
//! A geodata response is a flat list of typed elements: nodes carry
//! coordinates, ways reference nodes by id, and relations reference nodes
//! and ways as members. The discriminated shape matches the service's JSON
//! (`{type, id, lat?, lon?, nodes?, members?}`); unknown fields such as
//! tags are ignored during decode.

use serde::{Deserialize, Serialize};

/// Identity of an element, unique per element kind within a response
pub type ElementId = i64;

/// A leaf element with coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Element identity
    pub id: ElementId,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// An ordered sequence of node references.
///
/// May reference nodes absent from the same response; such references are
/// skipped during centroid computation, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    /// Element identity
    pub id: ElementId,
    /// Referenced node ids, in path order
    #[serde(default)]
    pub nodes: Vec<ElementId>,
}

/// The kind of element a relation member references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// Reference to a node
    Node,
    /// Reference to a way
    Way,
    /// Reference to another relation (not resolved)
    Relation,
}

/// A single member of a relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Kind of the referenced element
    #[serde(rename = "type")]
    pub kind: MemberKind,
    /// Identity of the referenced element
    #[serde(rename = "ref")]
    pub reference: ElementId,
}

/// An ordered grouping of nodes and ways
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Element identity
    pub id: ElementId,
    /// Members in declared order
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A typed geodata element, discriminated on the `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// A node with coordinates
    Node(Node),
    /// A way referencing nodes
    Way(Way),
    /// A relation referencing nodes and ways
    Relation(Relation),
}
