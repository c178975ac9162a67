use schemars::schema_for;

use crate::{payload::RoutePayload, pipeline::RouteReport};

pub fn generate_report_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(RouteReport))
}

pub fn generate_payload_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(RoutePayload))
}
