//! Internal error types for Etsy operations.
//!
//! These errors carry raw upstream detail for logging. They are mapped to
//! core port errors at the boundary in `port.rs`.

use thiserror::Error;

/// Result type alias for Etsy operations.
pub type EtsyResult<T> = Result<T, EtsyError>;

/// Errors related to Etsy API operations.
#[derive(Debug, Error)]
pub enum EtsyError {
    /// No API keystring is configured. No request was attempted.
    #[error("ETSY_API_KEY is not set")]
    MissingApiKey,

    /// A single request failed before any response arrived.
    #[error("Transport error: {message}")]
    Transport {
        /// Description from the HTTP client
        message: String,
    },

    /// The API could not be reached after all attempts.
    #[error("Network error after {attempts} attempts: {message}")]
    Network {
        /// Number of attempts made
        attempts: u32,
        /// Description of the last transport failure
        message: String,
    },

    /// The API kept answering 429 after all attempts.
    #[error("Rate limited after {attempts} attempts")]
    RateLimited {
        /// Number of attempts made
        attempts: u32,
    },

    /// The API answered 404.
    #[error("Resource not found: {path}")]
    NotFound {
        /// Request path, relative to the base URL
        path: String,
    },

    /// The API answered with another non-success status.
    #[error("Etsy API error {status}: {body}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild {
        /// Description from the HTTP client builder
        message: String,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl EtsyError {
    /// Stable short code for log lines.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::Transport { .. } | Self::Network { .. } => "NETWORK_ERROR",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ApiRequestFailed { .. } => "API_ERROR",
            Self::ClientBuild { .. } | Self::InvalidUrl(_) | Self::JsonParse(_) => "UNKNOWN",
        }
    }
}
