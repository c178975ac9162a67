use std::path::{Path, PathBuf};

use fleetroute_core::{payload::RoutePayload, request::RouteRequest};
use tracing::debug;

use crate::{envelope::Envelope, error::MaponError, telemetry_source::TelemetrySource, vehicle::Vehicle};

/// Accepts both a raw Mapon response (`{ "data": ... }`) and the bare payload.
pub fn parse_saved_payload(bytes: &[u8]) -> Result<RoutePayload, MaponError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;

    if value.get("data").is_some() || value.get("error").is_some() {
        let envelope: Envelope<RoutePayload> = serde_json::from_value(value)?;
        envelope.into_data()
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

/// Offline source backed by a saved route payload. Has no vehicle list.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TelemetrySource for FileSource {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, MaponError> {
        Ok(Vec::new())
    }

    async fn fetch_routes(&self, _request: &RouteRequest) -> Result<RoutePayload, MaponError> {
        debug!("FileSource: reading {:?}", self.path);
        let bytes = tokio::fs::read(&self.path).await?;
        parse_saved_payload(&bytes)
    }
}
