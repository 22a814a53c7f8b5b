//! Active listing queries.

use std::collections::BTreeSet;

use storefront_core::{Listing, ListingsPage, ListingsRequest};

use crate::error::EtsyResult;
use crate::http::HttpBackend;
use crate::models::EtsyListingsResponse;
use crate::parsing::to_listing;
use crate::url::{listings_path, ranking_batch_path};

use super::EtsyClient;

impl<B: HttpBackend> EtsyClient<B> {
    /// Fetch one page of active listings with native sorting.
    ///
    /// When more than one section is requested the API cannot filter, so the
    /// page is filtered locally. `total` is the count the API reported for
    /// the unfiltered query.
    pub(crate) async fn listings_page(&self, request: &ListingsRequest) -> EtsyResult<ListingsPage> {
        let shop_id = self.shop_id().await?;
        let response: EtsyListingsResponse = self
            .get_json(&listings_path(shop_id, request), self.config.listings_ttl)
            .await?;

        let mut listings: Vec<Listing> = response.results.into_iter().map(to_listing).collect();
        if request.section_ids.len() > 1 {
            listings.retain(|listing| listing.in_any_section(request.section_ids.iter()));
        }

        Ok(ListingsPage {
            listings,
            total: response.count,
        })
    }

    /// Fetch the newest listings as a candidate pool for in-memory ranking,
    /// keeping only those in `section_ids` when it is non-empty.
    pub(crate) async fn ranking_batch(&self, section_ids: &BTreeSet<u64>) -> EtsyResult<Vec<Listing>> {
        let shop_id = self.shop_id().await?;
        let path = ranking_batch_path(shop_id, self.config.ranking_batch_size);
        let response: EtsyListingsResponse = self.get_json(&path, self.config.listings_ttl).await?;

        let mut listings: Vec<Listing> = response.results.into_iter().map(to_listing).collect();
        if !section_ids.is_empty() {
            listings.retain(|listing| listing.in_any_section(section_ids.iter()));
        }
        Ok(listings)
    }
}
