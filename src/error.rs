//! Error types for the SDK.

use thiserror::Error;

/// SDK error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure (connection refused, DNS, TLS, broken pipe).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL is not an absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body did not match the expected schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body returned by the server.
        message: String,
    },

    /// A configured value cannot be sent as an HTTP header.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// HTTP status code of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server answered with a non-success status.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
