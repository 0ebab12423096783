//! Overpass adapter - implements GeodataPort using integration_overpass

use application::error::ApplicationError;
use application::ports::{GeodataPort, GeodataQuery, QuerySelector};
use async_trait::async_trait;
use domain::elements::Element;
use integration_overpass::{
    HttpOverpassClient, OverpassClient, OverpassConfig, OverpassError, QuerySpec, Selector,
};
use tracing::instrument;

/// Adapter exposing the Overpass client as the application's geodata port
#[derive(Debug)]
pub struct OverpassAdapter {
    client: HttpOverpassClient,
}

impl OverpassAdapter {
    /// Create a new adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OverpassConfig) -> Result<Self, ApplicationError> {
        let client =
            HttpOverpassClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map the port's selector to the wire query selector
    const fn map_selector(selector: QuerySelector) -> Selector {
        match selector {
            QuerySelector::NodeOnly => Selector::Node,
            QuerySelector::NodeWayRelation => Selector::NodeWayRelation,
            QuerySelector::WayRelationUnion => Selector::WayRelation,
        }
    }

    /// Map an Overpass client error to an application error
    fn map_error(err: OverpassError) -> ApplicationError {
        match err {
            OverpassError::ConnectionFailed(e)
            | OverpassError::RequestFailed(e)
            | OverpassError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OverpassError::RateLimitExceeded => {
                ApplicationError::ExternalService("Rate limit exceeded".to_string())
            },
            OverpassError::ParseError(e) => ApplicationError::Internal(e),
        }
    }
}

#[async_trait]
impl GeodataPort for OverpassAdapter {
    #[instrument(skip(self, query))]
    async fn query(&self, query: GeodataQuery) -> Result<Vec<Element>, ApplicationError> {
        let spec = QuerySpec::new(
            Self::map_selector(query.selector),
            query.filters,
            query.bbox,
        );
        self.client.execute(&spec).await.map_err(Self::map_error)
    }

    async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_mapping_is_total() {
        assert_eq!(
            OverpassAdapter::map_selector(QuerySelector::NodeOnly),
            Selector::Node
        );
        assert_eq!(
            OverpassAdapter::map_selector(QuerySelector::NodeWayRelation),
            Selector::NodeWayRelation
        );
        assert_eq!(
            OverpassAdapter::map_selector(QuerySelector::WayRelationUnion),
            Selector::WayRelation
        );
    }

    #[test]
    fn transport_errors_map_to_external_service() {
        let err = OverpassAdapter::map_error(OverpassError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::ExternalService(_)));
        assert!(err.is_retryable());

        let err =
            OverpassAdapter::map_error(OverpassError::ServiceUnavailable("HTTP 503".to_string()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn parse_errors_map_to_internal() {
        let err = OverpassAdapter::map_error(OverpassError::ParseError("bad json".to_string()));
        assert!(matches!(err, ApplicationError::Internal(_)));
    }

    #[test]
    fn adapter_creation_with_defaults() {
        assert!(OverpassAdapter::new(OverpassConfig::default()).is_ok());
    }
}
