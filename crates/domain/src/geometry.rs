//! Geometry resolver
//!
//! Turns a flat geodata element list into representative point coordinates.
//! A way's point is the unweighted arithmetic mean of its resolved node
//! coordinates; a relation contributes one point per member that resolves.
//! Unresolved references are expected sparse data, not errors: the resolver
//! never fails, it omits.

use std::collections::HashMap;

use crate::elements::{Element, ElementId, MemberKind, Way};
use crate::value_objects::Point;

/// Lookup table from node identity to coordinates, built from the nodes
/// seen so far in a response.
pub type NodeTable = HashMap<ElementId, Point>;

/// Compute the centroid of a way against a node lookup table.
///
/// Node references absent from the table are silently skipped. Returns
/// `None` if the way has no node references or none of them resolve.
#[must_use]
pub fn way_centroid(way: &Way, nodes: &NodeTable) -> Option<Point> {
    if way.nodes.is_empty() {
        return None;
    }

    let mut lat_sum = 0.0;
    let mut lon_sum = 0.0;
    let mut count = 0u32;

    for node_id in &way.nodes {
        if let Some(point) = nodes.get(node_id) {
            lat_sum += point.lat;
            lon_sum += point.lon;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let count = f64::from(count);
    Some(Point::new(lat_sum / count, lon_sum / count))
}

/// Resolve a flat element list into representative points.
///
/// Elements are processed in a single forward pass: nodes are indexed into
/// a lookup table, ways are collected in order, and each relation's members
/// are dereferenced against the table and way list as populated so far.
/// A node member emits its point; a way member emits its centroid (first
/// way with a matching id) when defined. After the pass, every collected
/// way emits its centroid when defined — ways already emitted as relation
/// members are emitted again, matching the two-pass behavior of the
/// original map pipeline.
#[must_use]
pub fn resolve_points(elements: &[Element]) -> Vec<Point> {
    let mut points = Vec::new();
    let mut nodes = NodeTable::new();
    let mut ways: Vec<&Way> = Vec::new();

    for element in elements {
        match element {
            Element::Node(node) => {
                nodes.insert(node.id, Point::new(node.lat, node.lon));
            },
            Element::Way(way) => {
                ways.push(way);
            },
            Element::Relation(relation) => {
                for member in &relation.members {
                    match member.kind {
                        MemberKind::Node => {
                            if let Some(point) = nodes.get(&member.reference) {
                                points.push(*point);
                            }
                        },
                        MemberKind::Way => {
                            let way = ways.iter().find(|w| w.id == member.reference);
                            if let Some(center) = way.and_then(|w| way_centroid(w, &nodes)) {
                                points.push(center);
                            }
                        },
                        // Nested relations are not dereferenced
                        MemberKind::Relation => {},
                    }
                }
            },
        }
    }

    for way in &ways {
        if let Some(center) = way_centroid(way, &nodes) {
            points.push(center);
        }
    }

    points
}

/// Extract raw node coordinates from an element list, in response order.
///
/// Used for the node-only query variant, where every element of interest
/// is a leaf node.
#[must_use]
pub fn node_points(elements: &[Element]) -> Vec<Point> {
    elements
        .iter()
        .filter_map(|element| match element {
            Element::Node(node) => Some(Point::new(node.lat, node.lon)),
            Element::Way(_) | Element::Relation(_) => None,
        })
        .collect()
}
