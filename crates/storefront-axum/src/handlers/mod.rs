//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `CatalogService`.

pub mod catalog;
pub mod contact;
