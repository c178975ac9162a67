use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::RouteError, segment::RouteSegment};

/// Route list for one unit, as returned by the telemetry provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UnitRoutes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<u64>,

    /// `None` when the provider omitted the array, which is not the same as
    /// an empty route list.
    #[serde(default)]
    pub routes: Option<Vec<RouteSegment>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RoutePayload")]
pub struct RoutePayload {
    #[serde(default)]
    pub units: Option<Vec<UnitRoutes>>,
}

impl RoutePayload {
    pub fn from_units(units: Vec<UnitRoutes>) -> Self {
        RoutePayload { units: Some(units) }
    }

    pub fn from_json(json: &str) -> Result<Self, RouteError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, RouteError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The segment sequence of the first unit.
    pub fn into_segments(self) -> Result<Vec<RouteSegment>, RouteError> {
        let units = self
            .units
            .ok_or(RouteError::NoRouteData("payload has no units"))?;

        let unit = units
            .into_iter()
            .next()
            .ok_or(RouteError::NoRouteData("payload units are empty"))?;

        unit.routes
            .ok_or(RouteError::NoRouteData("unit has no routes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_units_is_no_route_data() {
        let payload = RoutePayload::from_json(r#"{ "units": [] }"#).unwrap();

        assert!(payload.into_segments().unwrap_err().is_no_route_data());
    }

    #[test]
    fn test_missing_units_is_no_route_data() {
        let payload = RoutePayload::from_json("{}").unwrap();

        assert!(payload.into_segments().unwrap_err().is_no_route_data());
    }

    #[test]
    fn test_missing_routes_is_no_route_data() {
        let payload = RoutePayload::from_json(r#"{ "units": [{ "unit_id": 12 }] }"#).unwrap();

        assert!(payload.into_segments().unwrap_err().is_no_route_data());
    }

    #[test]
    fn test_null_routes_is_no_route_data() {
        let payload =
            RoutePayload::from_json(r#"{ "units": [{ "unit_id": 12, "routes": null }] }"#).unwrap();

        assert!(payload.into_segments().unwrap_err().is_no_route_data());
    }

    #[test]
    fn test_empty_routes_is_valid() {
        let payload = RoutePayload::from_json(r#"{ "units": [{ "routes": [] }] }"#).unwrap();

        assert!(payload.into_segments().unwrap().is_empty());
    }

    #[test]
    fn test_only_first_unit_is_used() {
        let payload = RoutePayload::from_json(
            r#"{ "units": [
                { "unit_id": 1, "routes": [{ "type": "route" }] },
                { "unit_id": 2, "routes": [{ "type": "route" }, { "type": "route" }] }
            ] }"#,
        )
        .unwrap();

        assert_eq!(payload.into_segments().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let error = RoutePayload::from_json(r#"{ "units": 3 }"#).unwrap_err();

        assert!(matches!(error, RouteError::Decode(_)));
    }
}
