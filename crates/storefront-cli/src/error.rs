//! CLI-specific error types and exit codes.

use storefront_core::{ErrorKind, MarketplaceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Marketplace failure.
    #[error("{0}")]
    Marketplace(#[from] MarketplaceError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to an exit code following sysexits.h.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Marketplace(err) => match err.kind() {
                ErrorKind::MissingCredential => 78, // EX_CONFIG
                ErrorKind::NotFound => 66,          // EX_NOINPUT
                ErrorKind::RateLimited | ErrorKind::NetworkError | ErrorKind::UpstreamError => {
                    69 // EX_UNAVAILABLE
                }
                ErrorKind::Unknown => 70, // EX_SOFTWARE
            },
            Self::Config(_) => 78,
            Self::Output(_) => 74, // EX_IOERR
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
