#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    BrowseQuery, DEFAULT_PAGE_SIZE, Listing, ListingImage, Pill, RankedView, RawBrowseParams,
    ShopSection, SortMode, rank_best_sellers, rank_by_price, rank_newest, rank_trending,
    rank_trending_at, trending_score,
};
pub use ports::{
    ErrorKind, ListingsPage, ListingsRequest, MarketplaceError, MarketplacePort,
    MarketplaceResult, SortDirection, SortField,
};
pub use services::{CatalogPage, CatalogService, StorefrontView};

#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
