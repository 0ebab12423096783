//! Geographic bounding box value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A geographic bounding box: south/west and north/east corners in degrees.
///
/// Rendered as `(south,west,north,east)` in geodata queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl BoundingBox {
    /// Create a new bounding box with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBoundingBox` if any corner is out of
    /// range or the corners are inverted.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&south) || !(-90.0..=90.0).contains(&north) {
            return Err(DomainError::InvalidBoundingBox(
                "latitude must be -90 to 90".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&west) || !(-180.0..=180.0).contains(&east) {
            return Err(DomainError::InvalidBoundingBox(
                "longitude must be -180 to 180".to_string(),
            ));
        }
        if south >= north {
            return Err(DomainError::InvalidBoundingBox(
                "south must be less than north".to_string(),
            ));
        }
        if west >= east {
            return Err(DomainError::InvalidBoundingBox(
                "west must be less than east".to_string(),
            ));
        }
        Ok(Self {
            south,
            west,
            north,
            east,
        })
    }

    /// Create a bounding box without validation (for trusted constants)
    #[must_use]
    pub const fn new_unchecked(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Lisbon and surroundings, the default map area
    #[must_use]
    pub const fn lisbon() -> Self {
        Self::new_unchecked(38.6, -9.3, 38.8, -9.0)
    }

    /// Southern latitude
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Western longitude
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Northern latitude
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Eastern longitude
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_box() {
        let bbox = BoundingBox::new(38.6, -9.3, 38.8, -9.0).expect("valid box");
        assert!((bbox.south() - 38.6).abs() < f64::EPSILON);
        assert!((bbox.east() - -9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(BoundingBox::new(-91.0, -9.3, 38.8, -9.0).is_err());
        assert!(BoundingBox::new(38.6, -9.3, 91.0, -9.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(BoundingBox::new(38.6, -181.0, 38.8, -9.0).is_err());
        assert!(BoundingBox::new(38.6, -9.3, 38.8, 181.0).is_err());
    }

    #[test]
    fn rejects_inverted_corners() {
        assert!(BoundingBox::new(38.8, -9.3, 38.6, -9.0).is_err());
        assert!(BoundingBox::new(38.6, -9.0, 38.8, -9.3).is_err());
    }

    #[test]
    fn display_matches_query_format() {
        let bbox = BoundingBox::lisbon();
        assert_eq!(format!("{bbox}"), "38.6,-9.3,38.8,-9");
    }

    #[test]
    fn lisbon_default_is_valid() {
        let bbox = BoundingBox::lisbon();
        assert!(BoundingBox::new(bbox.south(), bbox.west(), bbox.north(), bbox.east()).is_ok());
    }

    #[test]
    fn serialization_roundtrip() {
        let bbox = BoundingBox::lisbon();
        let json = serde_json::to_string(&bbox).expect("serialize");
        let deserialized: BoundingBox = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(bbox, deserialized);
    }
}
