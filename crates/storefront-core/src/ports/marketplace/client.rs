//! Marketplace client port trait.

use std::collections::BTreeSet;

use async_trait::async_trait;

use super::error::MarketplaceResult;
use super::types::{ListingsPage, ListingsRequest};
use crate::domain::{Listing, ShopSection};

/// Port trait for marketplace read operations.
///
/// This trait defines the interface that the core domain uses to read the
/// shop's catalog. The implementation lives in `storefront-etsy`.
///
/// # Design
///
/// - Uses core-owned DTOs, not marketplace API types
/// - Returns `MarketplaceError` for all failures; transient failures have
///   already been retried by the time they surface here
/// - Implementations resolve the shop identity themselves
#[async_trait]
pub trait MarketplacePort: Send + Sync {
    /// Fetch one page of active listings using the marketplace's native
    /// sorting and filtering.
    async fn fetch_listings(&self, request: &ListingsRequest) -> MarketplaceResult<ListingsPage>;

    /// Fetch an unordered bulk batch of active listings for in-memory ranking.
    ///
    /// When `section_ids` is non-empty, only listings in one of those
    /// sections are returned.
    async fn fetch_ranking_batch(
        &self,
        section_ids: &BTreeSet<u64>,
    ) -> MarketplaceResult<Vec<Listing>>;

    /// Fetch the shop's sections.
    async fn fetch_sections(&self) -> MarketplaceResult<Vec<ShopSection>>;
}
