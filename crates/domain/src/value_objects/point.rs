//! Geographic point value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A point on the map: latitude and longitude in degrees.
///
/// This is the only output type of the geometry resolver. It carries no
/// identity and is constructed freely; use [`Point::validated`] when the
/// coordinates come from untrusted user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl Point {
    /// Create a new point without range checks
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a point with range validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in
    /// [-90, 90] or longitude is not in [-180, 180].
    pub fn validated(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_accepts_boundaries() {
        assert!(Point::validated(90.0, 180.0).is_ok());
        assert!(Point::validated(-90.0, -180.0).is_ok());
        assert!(Point::validated(0.0, 0.0).is_ok());
    }

    #[test]
    fn validated_rejects_out_of_range_latitude() {
        assert!(Point::validated(91.0, 0.0).is_err());
        assert!(Point::validated(-91.0, 0.0).is_err());
    }

    #[test]
    fn validated_rejects_out_of_range_longitude() {
        assert!(Point::validated(0.0, 181.0).is_err());
        assert!(Point::validated(0.0, -181.0).is_err());
    }

    #[test]
    fn display_shows_both_coordinates() {
        let point = Point::new(38.7, -9.1);
        let display = format!("{point}");
        assert!(display.contains("38.7"));
        assert!(display.contains("-9.1"));
    }

    #[test]
    fn serialization_roundtrip() {
        let point = Point::new(38.7, -9.1);
        let json = serde_json::to_string(&point).expect("serialize");
        assert!(json.contains("lat"));
        assert!(json.contains("lon"));

        let deserialized: Point = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(point, deserialized);
    }
}
