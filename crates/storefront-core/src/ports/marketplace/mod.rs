//! Marketplace client port definitions.
//!
//! This module defines the port trait and DTOs for reading shop data from the
//! marketplace. The actual implementation lives in `storefront-etsy`.

mod client;
mod error;
mod types;

pub use client::MarketplacePort;
pub use error::{ErrorKind, MarketplaceError, MarketplaceResult};
pub use types::{ListingsPage, ListingsRequest, SortDirection, SortField};
