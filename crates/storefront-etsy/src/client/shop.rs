//! Shop identity and sections.

use std::time::Duration;

use storefront_core::ShopSection;
use tracing::debug;

use crate::error::EtsyResult;
use crate::http::HttpBackend;
use crate::models::{EtsyShop, EtsySectionsResponse};
use crate::parsing::to_section;
use crate::url::{sections_path, shop_path};

use super::EtsyClient;

impl<B: HttpBackend> EtsyClient<B> {
    /// Resolve the configured shop name to its numeric id.
    ///
    /// The first successful resolution is kept for the life of the client.
    /// Failures are not cached, so the next call tries again.
    pub(crate) async fn shop_id(&self) -> EtsyResult<u64> {
        if let Some(shop_id) = self.shop_id.get() {
            return Ok(shop_id);
        }

        let shop: EtsyShop = self
            .get_json(&shop_path(&self.config.shop_name), Duration::ZERO)
            .await?;
        let shop_id = self.shop_id.store(shop.shop_id);
        debug!(shop_name = %self.config.shop_name, shop_id, "Resolved Etsy shop id");
        Ok(shop_id)
    }

    /// Fetch the shop's sections in API order.
    pub(crate) async fn sections(&self) -> EtsyResult<Vec<ShopSection>> {
        let shop_id = self.shop_id().await?;
        let response: EtsySectionsResponse = self
            .get_json(&sections_path(shop_id), self.config.sections_ttl)
            .await?;

        Ok(response.results.into_iter().map(to_section).collect())
    }
}
