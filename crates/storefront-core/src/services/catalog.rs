//! Catalog service - the browse pipeline.
//!
//! Turns a canonical [`BrowseQuery`] into a page of listings. Regular views
//! are delegated to the marketplace's native sort and pagination; the best
//! seller and trending views fetch a bulk batch and are filtered, ranked and
//! paged in memory, because the heuristics need the whole catalog in view
//! before any page is cut.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{
    BrowseQuery, DEFAULT_PAGE_SIZE, Listing, RankedView, ShopSection, SortMode, rank_best_sellers,
    rank_trending_at,
};
use crate::ports::{
    ListingsPage, ListingsRequest, MarketplacePort, MarketplaceResult, SortDirection, SortField,
};

/// A rendered catalog page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    /// Listings on this page
    pub listings: Vec<Listing>,
    /// Total number of matching listings
    pub total: u64,
    /// Page number (1-indexed)
    pub page: u32,
    /// Listings per page
    pub page_size: u32,
    /// Canonical query string of the view
    pub query: String,
}

/// Data needed for the first render of the storefront.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontView {
    /// Shop sections (empty if they could not be fetched)
    pub sections: Vec<ShopSection>,
    /// First listing page; `None` for ranked views or when the fetch failed
    pub initial: Option<CatalogPage>,
}

/// Service composing the marketplace port with the ranking heuristics.
pub struct CatalogService {
    marketplace: Arc<dyn MarketplacePort>,
    page_size: u32,
}

impl CatalogService {
    /// Create a new catalog service over a marketplace port.
    pub fn new(marketplace: Arc<dyn MarketplacePort>) -> Self {
        Self {
            marketplace,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the number of listings per page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Listings per page.
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Build the native listings request for a non-ranked view.
    pub fn listings_request(&self, query: &BrowseQuery) -> ListingsRequest {
        let (field, direction) = match query.sort {
            SortMode::Newest => (SortField::Created, SortDirection::Desc),
            SortMode::PriceAsc => (SortField::Price, SortDirection::Asc),
            SortMode::PriceDesc => (SortField::Price, SortDirection::Desc),
        };

        ListingsRequest::new()
            .with_term(query.term.clone())
            .with_sections(query.section_ids.iter().copied())
            .with_sort(field, direction)
            .with_page(query.page, self.page_size)
    }

    /// Fetch one page of listings using the marketplace's native sorting.
    pub async fn listings(&self, request: &ListingsRequest) -> MarketplaceResult<ListingsPage> {
        self.marketplace.fetch_listings(request).await
    }

    /// Fetch the bulk batch used by the ranked views.
    ///
    /// Never fails: any marketplace error degrades to an empty list.
    pub async fn ranking_candidates(&self, section_ids: &BTreeSet<u64>) -> Vec<Listing> {
        match self.marketplace.fetch_ranking_batch(section_ids).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!(
                    code = e.kind().code(),
                    upstream_status = ?e.status(),
                    transient = e.is_transient(),
                    "Ranking batch unavailable, returning no listings: {e}"
                );
                Vec::new()
            }
        }
    }

    /// Fetch the shop's sections.
    ///
    /// Never fails: any marketplace error degrades to an empty list.
    pub async fn sections(&self) -> Vec<ShopSection> {
        match self.marketplace.fetch_sections().await {
            Ok(sections) => sections,
            Err(e) => {
                warn!(
                    code = e.kind().code(),
                    upstream_status = ?e.status(),
                    transient = e.is_transient(),
                    "Shop sections unavailable, returning none: {e}"
                );
                Vec::new()
            }
        }
    }

    /// Resolve a browse query into a catalog page.
    pub async fn browse(&self, query: &BrowseQuery) -> MarketplaceResult<CatalogPage> {
        self.browse_at(query, chrono::Utc::now().timestamp()).await
    }

    /// Resolve a browse query into a catalog page, ranking trending listings
    /// as of `now` (seconds since epoch).
    pub async fn browse_at(&self, query: &BrowseQuery, now: i64) -> MarketplaceResult<CatalogPage> {
        if let Some(view) = query.ranked_view() {
            return Ok(self.ranked_page(query, view, now).await);
        }

        let request = self.listings_request(query);
        let page = self.listings(&request).await?;

        Ok(CatalogPage {
            listings: page.listings,
            total: page.total,
            page: query.page,
            page_size: self.page_size,
            query: query.to_query_string(),
        })
    }

    /// Fetch everything needed for the first storefront render.
    ///
    /// Sections and the first listing page are fetched concurrently. Ranked
    /// views skip the listing fetch and leave `initial` empty.
    pub async fn storefront(&self, query: &BrowseQuery) -> StorefrontView {
        let initial = async {
            if query.is_ranked_view() {
                return None;
            }
            match self.browse(query).await {
                Ok(page) => Some(page),
                Err(e) => {
                    warn!(
                        code = e.kind().code(),
                        upstream_status = ?e.status(),
                        transient = e.is_transient(),
                        "Initial catalog page unavailable: {e}"
                    );
                    None
                }
            }
        };

        let (sections, initial) = tokio::join!(self.sections(), initial);
        StorefrontView { sections, initial }
    }

    async fn ranked_page(&self, query: &BrowseQuery, view: RankedView, now: i64) -> CatalogPage {
        let candidates = self.ranking_candidates(&query.section_ids).await;

        let filtered: Vec<Listing> = candidates
            .into_iter()
            .filter(|listing| listing.matches_term(&query.term))
            .collect();

        let ranked = match view {
            RankedView::BestSellers => rank_best_sellers(filtered),
            RankedView::Trending => rank_trending_at(filtered, now),
        };

        let total = ranked.len() as u64;
        let start = query.offset(self.page_size) as usize;
        let listings: Vec<Listing> = ranked
            .into_iter()
            .skip(start)
            .take(self.page_size as usize)
            .collect();

        debug!(
            view = view.as_str(),
            total,
            returned = listings.len(),
            "Ranked catalog page"
        );

        CatalogPage {
            listings,
            total,
            page: query.page,
            page_size: self.page_size,
            query: query.to_query_string(),
        }
    }
}
