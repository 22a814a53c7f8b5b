//! Command handlers.
//!
//! Handlers delegate to `CatalogService` and print results to stdout.

pub mod listings;
pub mod query;
pub mod sections;
pub mod serve;
