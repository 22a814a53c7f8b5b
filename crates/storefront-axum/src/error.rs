//! Axum-specific error types and mappings.
//!
//! Marketplace failures are answered with fixed, user-facing messages. The
//! underlying error was already logged with full detail by the adapter that
//! produced it.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use storefront_core::{ErrorKind, MarketplaceError};
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Marketplace failure.
    #[error(transparent)]
    Marketplace(#[from] MarketplaceError),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Shopper-facing message for a contact body that could not be read.
pub const CONTACT_BODY_REJECTED: &str = "Failed to send message.";

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        // Rejection text carries serde detail; keep it in the log only
        tracing::debug!(status = %rejection.status(), "Rejected JSON body: {}", rejection.body_text());
        Self::BadRequest(CONTACT_BODY_REJECTED.to_string())
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error code for client-side handling
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

/// HTTP status for a marketplace failure kind.
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::NetworkError | ErrorKind::UpstreamError => StatusCode::BAD_GATEWAY,
        ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Shopper-facing message for a marketplace failure kind.
pub const fn user_message_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::MissingCredential => {
            "The shop is temporarily unavailable. Please check back soon."
        }
        ErrorKind::RateLimited => {
            "We're receiving a lot of traffic. Please wait a moment and try again."
        }
        ErrorKind::NotFound => "This collection couldn't be found.",
        ErrorKind::NetworkError | ErrorKind::UpstreamError => {
            "Couldn't reach the shop right now. Please try refreshing."
        }
        ErrorKind::Unknown => "Something went wrong loading the shop. Please try again.",
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, code) = match &self {
            Self::Marketplace(err) => {
                let kind = err.kind();
                (
                    status_for(kind),
                    user_message_for(kind).to_string(),
                    Some(kind.code()),
                )
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            code,
        };

        (status, axum::Json(body)).into_response()
    }
}
