//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - No marketplace wire formats; adapters map them to domain types
//! - Errors are classified and safe to show; raw upstream detail stays in logs

pub mod marketplace;

pub use marketplace::{
    ErrorKind, ListingsPage, ListingsRequest, MarketplaceError, MarketplacePort,
    MarketplaceResult, SortDirection, SortField,
};
