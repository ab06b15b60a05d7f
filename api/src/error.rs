use dioxus::prelude::ServerFnError;
use thiserror::Error;

/// Failures talking to the upstream backend or loading its configuration.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("request to {endpoint} failed: {message}")]
    Transport {
        endpoint: &'static str,
        message: String,
    },

    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("{endpoint} rejected the request (code {code}): {message}")]
    Backend {
        endpoint: &'static str,
        code: i32,
        message: String,
    },

    #[error("could not decode {endpoint} response: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Message to surface to the user when the backend declared the failure itself.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn into_server_error(self) -> ServerFnError {
        ServerFnError::ServerError(self.to_string())
    }
}
