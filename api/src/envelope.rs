//! The backend wraps every payload as `{ code, message, data }`.

use serde::Deserialize;

use crate::error::ApiError;

const SUCCESS_CODE: i32 = 200;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default = "success_code")]
    code: i32,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

fn success_code() -> i32 {
    SUCCESS_CODE
}

impl<T> Envelope<T> {
    /// Splits the envelope into its payload or a `Backend` error.
    pub(crate) fn into_data(self, endpoint: &'static str) -> Result<Option<T>, ApiError> {
        if self.code == SUCCESS_CODE {
            Ok(self.data)
        } else {
            Err(ApiError::Backend {
                endpoint,
                code: self.code,
                message: self.message.unwrap_or_default(),
            })
        }
    }
}

pub(crate) fn decode<T>(endpoint: &'static str, body: &str) -> Result<Option<T>, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|err| ApiError::Decode {
            endpoint,
            message: err.to_string(),
        })?;
    envelope.into_data(endpoint)
}
