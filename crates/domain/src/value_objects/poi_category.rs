//! Point-of-interest categories and their geodata tag filters

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A single key/value tag filter in the geodata query language,
/// e.g. `amenity=drinking_water`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    /// Tag key
    pub key: String,
    /// Tag value
    pub value: String,
}

impl TagFilter {
    /// Create a new tag filter
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Categories of points of interest shown on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoiCategory {
    /// Public drinking water taps
    DrinkingWater,
    /// Fountains
    Fountain,
    /// Shopping malls
    Mall,
    /// Parks and gardens
    ParkGarden,
}

impl PoiCategory {
    /// All categories, in map-rendering order
    pub const ALL: [Self; 4] = [
        Self::DrinkingWater,
        Self::Fountain,
        Self::Mall,
        Self::ParkGarden,
    ];

    /// Tag filters identifying this category in the geodata service.
    ///
    /// Multiple filters form a union: an element matches the category if it
    /// matches any of them.
    #[must_use]
    pub fn tag_filters(&self) -> Vec<TagFilter> {
        match self {
            Self::DrinkingWater => vec![TagFilter::new("amenity", "drinking_water")],
            Self::Fountain => vec![TagFilter::new("amenity", "fountain")],
            Self::Mall => vec![TagFilter::new("shop", "mall")],
            Self::ParkGarden => vec![
                TagFilter::new("leisure", "park"),
                TagFilter::new("leisure", "garden"),
            ],
        }
    }

    /// The URL path segment identifying this category
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::DrinkingWater => "water",
            Self::Fountain => "fountains",
            Self::Mall => "malls",
            Self::ParkGarden => "parks",
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for PoiCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "water" => Ok(Self::DrinkingWater),
            "fountains" => Ok(Self::Fountain),
            "malls" => Ok(Self::Mall),
            "parks" => Ok(Self::ParkGarden),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_filters_match_source_data() {
        assert_eq!(
            PoiCategory::DrinkingWater.tag_filters(),
            vec![TagFilter::new("amenity", "drinking_water")]
        );
        assert_eq!(
            PoiCategory::Mall.tag_filters(),
            vec![TagFilter::new("shop", "mall")]
        );
    }

    #[test]
    fn park_garden_is_a_union_of_two_filters() {
        let filters = PoiCategory::ParkGarden.tag_filters();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].value, "park");
        assert_eq!(filters[1].value, "garden");
    }

    #[test]
    fn slug_roundtrip() {
        for category in PoiCategory::ALL {
            let parsed: PoiCategory = category.slug().parse().expect("slug parses back");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let result = "castles".parse::<PoiCategory>();
        assert!(matches!(result, Err(DomainError::UnknownCategory(_))));
    }

    #[test]
    fn display_matches_slug() {
        assert_eq!(PoiCategory::Fountain.to_string(), "fountains");
        assert_eq!(PoiCategory::ParkGarden.to_string(), "parks");
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&PoiCategory::DrinkingWater).expect("serialize");
        assert_eq!(json, "\"drinking_water\"");
    }
}
