//! `MarketplacePort` implementation for `EtsyClient`.
//!
//! Every failure is logged here with its raw detail, then reduced to a core
//! `MarketplaceError` that carries only a safe message.

use std::collections::BTreeSet;

use async_trait::async_trait;
use storefront_core::{
    Listing, ListingsPage, ListingsRequest, MarketplaceError, MarketplacePort, MarketplaceResult,
    ShopSection,
};
use tracing::{error, warn};

use crate::client::EtsyClient;
use crate::error::EtsyError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `EtsyError` to core `MarketplaceError`.
fn map_error(err: EtsyError) -> MarketplaceError {
    match err {
        EtsyError::MissingApiKey => MarketplaceError::MissingCredential,
        EtsyError::Transport { .. } | EtsyError::Network { .. } => MarketplaceError::Network,
        EtsyError::RateLimited { .. } => MarketplaceError::RateLimited,
        EtsyError::NotFound { path } => MarketplaceError::NotFound {
            resource: strip_query(&path).to_string(),
        },
        EtsyError::ApiRequestFailed { status, .. } => MarketplaceError::Upstream { status },
        EtsyError::JsonParse(_) => MarketplaceError::Unknown {
            message: "Failed to parse marketplace response".to_string(),
        },
        EtsyError::InvalidUrl(_) | EtsyError::ClientBuild { .. } => MarketplaceError::Unknown {
            message: "Marketplace client is misconfigured".to_string(),
        },
    }
}

fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(path, _)| path)
}

/// Log a failed operation with full detail, then map it for the port.
fn report(operation: &'static str, err: EtsyError) -> MarketplaceError {
    match &err {
        EtsyError::RateLimited { .. } => {
            warn!(operation, code = err.code(), error = %err, "Etsy request rate limited");
        }
        _ => error!(operation, code = err.code(), error = %err, "Etsy request failed"),
    }
    map_error(err)
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> MarketplacePort for EtsyClient<B> {
    async fn fetch_listings(&self, request: &ListingsRequest) -> MarketplaceResult<ListingsPage> {
        self.listings_page(request)
            .await
            .map_err(|e| report("fetch_listings", e))
    }

    async fn fetch_ranking_batch(
        &self,
        section_ids: &BTreeSet<u64>,
    ) -> MarketplaceResult<Vec<Listing>> {
        self.ranking_batch(section_ids)
            .await
            .map_err(|e| report("fetch_ranking_batch", e))
    }

    async fn fetch_sections(&self) -> MarketplaceResult<Vec<ShopSection>> {
        self.sections()
            .await
            .map_err(|e| report("fetch_sections", e))
    }
}
