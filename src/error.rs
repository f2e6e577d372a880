use reqwest::StatusCode;
use thiserror::Error;

/// Why a call to the prediction backend went wrong. Never shown to the
/// user; only logged.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Prediction server error: HTTP {0}")]
    Status(StatusCode),

    #[error("JSON parsing error: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Malformed response: {0}")]
    Malformed(String),
}
