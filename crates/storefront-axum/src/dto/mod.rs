//! Request and response bodies that are specific to the HTTP surface.
//!
//! Catalog payloads (`CatalogPage`, `StorefrontView`) are serialized
//! straight from the core types.

use serde::{Deserialize, Serialize};
use storefront_core::ShopSection;

/// `GET /api/sections` response.
#[derive(Debug, Clone, Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<ShopSection>,
}

/// `POST /api/contact` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// All fields are present and non-blank.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// `POST /api/contact` response.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}
