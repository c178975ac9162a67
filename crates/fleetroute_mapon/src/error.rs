use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaponError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Mapon error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("Response has no data")]
    MissingData,

    #[error("Missing API key, set {0}")]
    MissingApiKey(&'static str),

    #[error("Failed to read payload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}
