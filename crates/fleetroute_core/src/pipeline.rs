use geojson::FeatureCollection;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    aggregator::{AggregatedRoute, aggregate},
    error::RouteError,
    geometry::{RouteGeometry, project, to_feature_collection},
    payload::RoutePayload,
    request::RouteRequest,
};

/// Result of one "generate" run for a vehicle and period.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename = "RouteReport")]
pub struct RouteReport {
    pub request: RouteRequest,
    pub route: AggregatedRoute,

    #[serde(skip)]
    pub geometry: RouteGeometry,

    /// Map layer: a LineString per drawable segment plus start/end markers.
    #[schemars(with = "serde_json::Value")]
    pub map: FeatureCollection,
}

impl RouteReport {
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

/// Raw payload to totals and map layer. Stateless, one call per request.
#[instrument(skip_all, level = "debug", fields(vehicle_id = %request.vehicle_id))]
pub fn generate(request: RouteRequest, payload: RoutePayload) -> Result<RouteReport, RouteError> {
    let segments = payload.into_segments()?;
    let route = aggregate(segments)?;
    let geometry = project(&route);
    let map = to_feature_collection(&geometry);

    debug!(
        "generate: {} segments, {} map features",
        route.segments().len(),
        map.features.len()
    );

    Ok(RouteReport {
        request,
        route,
        geometry,
        map,
    })
}
