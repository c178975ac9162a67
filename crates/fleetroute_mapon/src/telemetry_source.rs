use fleetroute_core::{payload::RoutePayload, request::RouteRequest};

use crate::{error::MaponError, vehicle::Vehicle};

/// Where vehicles and raw route payloads come from.
#[allow(async_fn_in_trait)]
pub trait TelemetrySource {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, MaponError>;

    async fn fetch_routes(&self, request: &RouteRequest) -> Result<RoutePayload, MaponError>;
}
