//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators between ports and domain logic.
//! They don't know about concrete implementations.

mod catalog;

pub use catalog::{CatalogPage, CatalogService, StorefrontView};
