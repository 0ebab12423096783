//! Point-of-interest service
//!
//! One fetch operation per map category, plus the aggregate map view. Each
//! category operation degrades to an empty point list when the upstream
//! geodata service fails; the map renders without that layer.

use std::{fmt, sync::Arc};

use domain::entities::Tag;
use domain::geometry::{node_points, resolve_points};
use domain::value_objects::{BoundingBox, Point, PoiCategory};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeodataPort, GeodataQuery, QuerySelector, TagStorePort},
};

/// Aggregate payload for the initial map load: every category's points plus
/// the persisted tags.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Drinking water points
    pub water: Vec<Point>,
    /// Fountain points
    pub fountains: Vec<Point>,
    /// Shopping mall points
    pub malls: Vec<Point>,
    /// Park and garden points
    pub parks: Vec<Point>,
    /// User-submitted tags
    pub tags: Vec<Tag>,
}

/// Service for fetching map points of interest
pub struct PoiService {
    geodata: Arc<dyn GeodataPort>,
    tag_store: Arc<dyn TagStorePort>,
    bbox: BoundingBox,
}

impl fmt::Debug for PoiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoiService")
            .field("bbox", &self.bbox)
            .finish_non_exhaustive()
    }
}

impl Clone for PoiService {
    fn clone(&self) -> Self {
        Self {
            geodata: Arc::clone(&self.geodata),
            tag_store: Arc::clone(&self.tag_store),
            bbox: self.bbox,
        }
    }
}

impl PoiService {
    /// Create a new POI service over the given viewport
    #[must_use]
    pub fn new(
        geodata: Arc<dyn GeodataPort>,
        tag_store: Arc<dyn TagStorePort>,
        bbox: BoundingBox,
    ) -> Self {
        Self {
            geodata,
            tag_store,
            bbox,
        }
    }

    /// Drinking water points: a single node-only query, raw coordinates
    #[instrument(skip(self))]
    pub async fn water_points(&self) -> Vec<Point> {
        let elements = self
            .fetch_or_empty(QuerySelector::NodeOnly, PoiCategory::DrinkingWater)
            .await;
        node_points(&elements)
    }

    /// Fountain points: resolved way/relation centroids plus raw node points
    #[instrument(skip(self))]
    pub async fn fountain_points(&self) -> Vec<Point> {
        self.two_phase_points(PoiCategory::Fountain).await
    }

    /// Mall points: resolved way/relation centroids plus raw node points
    #[instrument(skip(self))]
    pub async fn mall_points(&self) -> Vec<Point> {
        self.two_phase_points(PoiCategory::Mall).await
    }

    /// Park and garden points: way+relation union resolved to centroids
    #[instrument(skip(self))]
    pub async fn park_points(&self) -> Vec<Point> {
        let elements = self
            .fetch_or_empty(QuerySelector::WayRelationUnion, PoiCategory::ParkGarden)
            .await;
        resolve_points(&elements)
    }

    /// Points for a single category
    pub async fn points_for(&self, category: PoiCategory) -> Vec<Point> {
        match category {
            PoiCategory::DrinkingWater => self.water_points().await,
            PoiCategory::Fountain => self.fountain_points().await,
            PoiCategory::Mall => self.mall_points().await,
            PoiCategory::ParkGarden => self.park_points().await,
        }
    }

    /// Aggregate load path: all four categories fetched concurrently, plus
    /// the persisted tags. A failing tag select is an error; failing category
    /// fetches degrade to empty lists.
    #[instrument(skip(self))]
    pub async fn map_view(&self) -> Result<MapView, ApplicationError> {
        let (water, fountains, malls, parks, tags) = tokio::join!(
            self.water_points(),
            self.fountain_points(),
            self.mall_points(),
            self.park_points(),
            self.tag_store.list(),
        );
        let tags = tags?;

        debug!(
            water = water.len(),
            fountains = fountains.len(),
            malls = malls.len(),
            parks = parks.len(),
            tags = tags.len(),
            "Map view assembled"
        );

        Ok(MapView {
            water,
            fountains,
            malls,
            parks,
            tags,
        })
    }

    /// Check if the upstream geodata service is reachable
    pub async fn geodata_healthy(&self) -> bool {
        self.geodata.is_healthy().await
    }

    /// Two-request pattern shared by fountains and malls: a full
    /// node/way/relation query resolved to centroids, then a node-only query
    /// whose raw points are appended.
    async fn two_phase_points(&self, category: PoiCategory) -> Vec<Point> {
        let resolved = self
            .fetch_or_empty(QuerySelector::NodeWayRelation, category)
            .await;
        let nodes = self.fetch_or_empty(QuerySelector::NodeOnly, category).await;

        let mut points = resolve_points(&resolved);
        points.extend(node_points(&nodes));
        points
    }

    async fn fetch_or_empty(
        &self,
        selector: QuerySelector,
        category: PoiCategory,
    ) -> Vec<domain::elements::Element> {
        let query = GeodataQuery::new(selector, category.tag_filters(), self.bbox);
        match self.geodata.query(query).await {
            Ok(elements) => elements,
            Err(e) => {
                warn!(%category, error = %e, "Geodata fetch failed, returning empty layer");
                Vec::new()
            },
        }
    }
}
