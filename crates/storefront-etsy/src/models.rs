//! Raw Etsy Open API v3 response types.
//!
//! These types mirror the wire format and are internal to `storefront-etsy`.
//! Consumers see core `Listing` and `ShopSection` values instead. Fields the
//! storefront never reads are not modeled; serde ignores them.

use serde::Deserialize;

/// `GET /shops/{shop_name}`
#[derive(Debug, Clone, Deserialize)]
pub struct EtsyShop {
    pub shop_id: u64,
}

/// One entry of `GET /shops/{shop_id}/sections`.
#[derive(Debug, Clone, Deserialize)]
pub struct EtsyShopSection {
    pub shop_section_id: u64,
    pub title: String,
    #[serde(default)]
    pub active_listing_count: u64,
}

/// A monetary amount as `amount / divisor` in `currency_code`.
#[derive(Debug, Clone, Deserialize)]
pub struct EtsyMoney {
    pub amount: i64,
    pub divisor: i64,
    pub currency_code: String,
}

/// Listing image, present when requested with `includes=Images`.
#[derive(Debug, Clone, Deserialize)]
pub struct EtsyListingImage {
    #[serde(rename = "url_570xN")]
    pub url_570xn: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// One active listing.
#[derive(Debug, Clone, Deserialize)]
pub struct EtsyListing {
    pub listing_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub price: EtsyMoney,
    #[serde(default)]
    pub num_favorers: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,
    pub created_timestamp: i64,
    pub updated_timestamp: i64,
    #[serde(default)]
    pub shop_section_id: Option<u64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<EtsyListingImage>>,
}

/// Paginated result envelope used by list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct EtsyPage<T> {
    pub count: u64,
    pub results: Vec<T>,
}

pub type EtsyListingsResponse = EtsyPage<EtsyListing>;
pub type EtsySectionsResponse = EtsyPage<EtsyShopSection>;
