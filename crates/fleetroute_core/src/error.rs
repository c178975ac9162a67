use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Failed to parse {field} timestamp {value:?}: {source}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: jiff::Error,
    },

    #[error("Missing {field} timestamp on segment {segment}")]
    MissingTime { field: &'static str, segment: usize },

    #[error("No route data: {0}")]
    NoRouteData(&'static str),

    #[error("Invalid route window: {from} is after {till}")]
    InvalidWindow {
        from: jiff::Timestamp,
        till: jiff::Timestamp,
    },

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RouteError {
    /// Timestamp problems abort the whole aggregation.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, RouteError::Parse { .. } | RouteError::MissingTime { .. })
    }

    pub fn is_no_route_data(&self) -> bool {
        matches!(self, RouteError::NoRouteData(_))
    }
}
