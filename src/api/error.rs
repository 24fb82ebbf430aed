//! Error handling for the bot API client

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body was not the JSON shape the endpoint promises.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status and no usable body.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Level the underlying failure is reported at in diagnostics.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Backend restarting or overloaded
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Wrong base URL or a proxy in between
            ApiError::Http { status, .. } if *status == 404 => LogLevel::Error,
            ApiError::Http { .. } => LogLevel::Warn,

            // Backend not reachable or the connection dropped
            ApiError::Reqwest(_) => LogLevel::Warn,

            // Backend speaking a different shape than expected
            ApiError::Decode(_) => LogLevel::Error,
        }
    }
}
