//! CLI bootstrap - the composition root for one-shot commands.
//!
//! `serve` composes its own context through `storefront-axum`; every other
//! command receives a `CliContext` built here.

use std::sync::Arc;

use anyhow::Result;
use storefront_core::{CatalogService, MarketplacePort};
use storefront_etsy::{DefaultEtsyClient, EtsyClientConfig};

use crate::error::CliError;

/// Fully composed context for catalog commands.
pub struct CliContext {
    /// Catalog service over the Etsy client.
    pub catalog: CatalogService,
}

/// Build the CLI context from the Etsy client configuration.
///
/// A client that cannot be built (bad base URL, TLS setup failure) is a
/// configuration error.
pub fn bootstrap(config: &EtsyClientConfig) -> Result<CliContext> {
    let client = DefaultEtsyClient::new(config)
        .map_err(|e| CliError::Config(format!("Failed to create Etsy client: {e}")))?;
    let marketplace: Arc<dyn MarketplacePort> = Arc::new(client);

    Ok(CliContext {
        catalog: CatalogService::new(marketplace),
    })
}
