//! Error types for marketplace port operations.

use serde::Serialize;
use thiserror::Error;

/// Classification of a marketplace failure.
///
/// Callers branch on the kind rather than on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// No API credential is configured
    MissingCredential,
    /// Rate limited after all retries
    RateLimited,
    /// The requested resource does not exist
    NotFound,
    /// Any other non-success response from the marketplace
    UpstreamError,
    /// The marketplace could not be reached
    NetworkError,
    /// Unexpected failure, including unparseable responses
    Unknown,
}

impl ErrorKind {
    /// Stable code for logs and client-side handling.
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingCredential => "MISSING_CREDENTIAL",
            Self::RateLimited => "RATE_LIMITED",
            Self::NotFound => "NOT_FOUND",
            Self::UpstreamError => "UPSTREAM_ERROR",
            Self::NetworkError => "NETWORK_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Errors from marketplace port operations.
///
/// These are domain-level errors that consumers can handle. Messages are
/// composed by the adapter and never contain raw upstream response bodies,
/// which are logged at the point of failure instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketplaceError {
    /// The API credential is not configured.
    #[error("Marketplace API key is not configured")]
    MissingCredential,

    /// API rate limit exceeded after all retries.
    #[error("Marketplace API rate limit exceeded, try again shortly")]
    RateLimited,

    /// The requested resource does not exist.
    #[error("Resource not found: {resource}")]
    NotFound {
        /// The resource that was requested
        resource: String,
    },

    /// The marketplace answered with a non-success status.
    #[error("Marketplace API error ({status})")]
    Upstream {
        /// HTTP status code
        status: u16,
    },

    /// The marketplace could not be reached after all retries.
    #[error("Network error reaching the marketplace API")]
    Network,

    /// Unexpected failure.
    #[error("Unexpected marketplace failure: {message}")]
    Unknown {
        /// Safe description of what went wrong
        message: String,
    },
}

impl MarketplaceError {
    /// Get the classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential => ErrorKind::MissingCredential,
            Self::RateLimited => ErrorKind::RateLimited,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Upstream { .. } => ErrorKind::UpstreamError,
            Self::Network => ErrorKind::NetworkError,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// HTTP status reported by the marketplace, if there was one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::Upstream { status } => Some(*status),
            Self::MissingCredential | Self::Network | Self::Unknown { .. } => None,
        }
    }

    /// Whether the failure was of a kind the client retries before surfacing.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited | Self::Network => true,
            Self::Upstream { status } => *status >= 500,
            Self::MissingCredential | Self::NotFound { .. } | Self::Unknown { .. } => false,
        }
    }
}

/// Result type alias for marketplace port operations.
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;
