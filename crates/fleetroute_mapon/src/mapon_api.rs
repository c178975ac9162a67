use fleetroute_core::{payload::RoutePayload, request::RouteRequest};
use jiff::Timestamp;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    envelope::Envelope,
    error::MaponError,
    telemetry_source::TelemetrySource,
    vehicle::{UnitList, Vehicle},
};

pub const MAPON_API_URL: &str = "https://mapon.com/api/v1";
pub const MAPON_UNIT_LIST_PATH: &str = "/unit/list.json";
pub const MAPON_ROUTE_LIST_PATH: &str = "/route/list.json";

pub const API_KEY_ENV_VAR: &str = "MAPON_API_KEY";
pub const API_URL_ENV_VAR: &str = "MAPON_API_URL";

pub struct MaponClientParams {
    pub api_key: String,
    pub base_url: String,
}

impl MaponClientParams {
    pub fn from_env() -> Result<Self, MaponError> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(MaponError::MissingApiKey(API_KEY_ENV_VAR))?;

        let base_url = std::env::var(API_URL_ENV_VAR).unwrap_or_else(|_| MAPON_API_URL.to_string());

        Ok(MaponClientParams { api_key, base_url })
    }
}

/// Second precision, UTC, no fractional part: `2024-03-04T00:00:00Z`.
pub fn format_mapon_time(timestamp: Timestamp) -> String {
    timestamp.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn route_list_query(api_key: &str, request: &RouteRequest) -> Vec<(&'static str, String)> {
    vec![
        ("key", api_key.to_string()),
        ("from", format_mapon_time(request.window.from())),
        ("till", format_mapon_time(request.window.till())),
        ("include[]", "decoded_route".to_string()),
        ("unit_id", request.vehicle_id.to_string()),
    ]
}

pub struct MaponClient {
    params: MaponClientParams,
    client: reqwest::Client,
}

impl MaponClient {
    pub fn new(params: MaponClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self, MaponError> {
        Ok(MaponClient::new(MaponClientParams::from_env()?))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.params.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, MaponError> {
        let response = self.client.get(self.url(path)).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MaponError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;

        envelope.into_data()
    }
}

impl TelemetrySource for MaponClient {
    #[instrument(skip_all, level = "debug")]
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, MaponError> {
        let query = [("key", self.params.api_key.clone())];
        let list: UnitList = self.get(MAPON_UNIT_LIST_PATH, &query).await?;

        debug!("MaponApi: fetched {} units", list.units.len());

        Ok(list.units)
    }

    #[instrument(skip_all, level = "debug", fields(vehicle_id = %request.vehicle_id))]
    async fn fetch_routes(&self, request: &RouteRequest) -> Result<RoutePayload, MaponError> {
        let query = route_list_query(&self.params.api_key, request);

        debug!(
            "MaponApi: fetching routes {} - {}",
            request.window.from(),
            request.window.till()
        );

        self.get(MAPON_ROUTE_LIST_PATH, &query).await
    }
}
