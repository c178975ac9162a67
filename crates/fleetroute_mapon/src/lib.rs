pub mod envelope;
pub mod error;
pub mod file_source;
pub mod mapon_api;
pub mod telemetry_source;
pub mod vehicle;
