use thiserror::Error;

/// API-specific errors for pixela-api
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Core domain error: {0}")]
    Core(#[from] pixela_core::CoreError),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures surfaced by the HTTP exchange itself. Every status variant
/// carries the server-supplied message so a failure is never empty.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Authentication failed ({status}): {message}")]
    AuthenticationFailed { status: u16, message: String },

    #[error("Not found (404): {message}")]
    NotFound { message: String },

    #[error("Service unavailable (503): {message}")]
    ServiceUnavailable { message: String },

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
