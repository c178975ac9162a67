use serde::Deserialize;

use crate::error::MaponError;

#[derive(Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub code: i64,
    #[serde(default, alias = "message")]
    pub msg: String,
}

/// Every Mapon response is `{ "data": ... }` or `{ "error": ... }`.
#[derive(Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<RemoteError>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Result<T, MaponError> {
        if let Some(error) = self.error {
            return Err(MaponError::Remote {
                code: error.code,
                message: error.msg,
            });
        }

        self.data.ok_or(MaponError::MissingData)
    }
}
