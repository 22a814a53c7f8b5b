//! Core domain types.
//!
//! These types represent the pure domain model, independent of the
//! marketplace API or the HTTP layer.
//!
//! # Structure
//!
//! - `listing` - Normalized listing and shop section types
//! - `query` - The canonical browse query and its transitions
//! - `ranking` - Heuristic orderings for the best seller and trending views

mod listing;
mod query;
mod ranking;

pub use listing::{Listing, ListingImage, ShopSection};
pub use query::{BrowseQuery, DEFAULT_PAGE_SIZE, Pill, RankedView, RawBrowseParams, SortMode};
pub use ranking::{
    rank_best_sellers, rank_by_price, rank_newest, rank_trending, rank_trending_at,
    trending_score,
};
