#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// EtsyClient<B> is reachable through the DefaultEtsyClient alias only; the
// backend trait stays crate-private.
#![allow(private_bounds)]

mod cache;
mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod retry;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultEtsyClient;

// Configuration
pub use config::EtsyClientConfig;

// Errors
pub use error::{EtsyError, EtsyResult};
