//! Listings command handler.

use storefront_core::{BrowseQuery, CatalogPage};

use crate::bootstrap::CliContext;
use crate::commands::ListingsArgs;
use crate::error::CliError;

/// Fetch the requested page and render it as pretty JSON.
pub async fn render(ctx: &CliContext, args: &ListingsArgs) -> Result<String, CliError> {
    let query = BrowseQuery::parse(&args.raw_params());
    tracing::debug!(query = %query, "Browsing catalog");

    let page: CatalogPage = ctx.catalog.browse(&query).await?;
    Ok(serde_json::to_string_pretty(&page)?)
}

/// Execute the listings command.
pub async fn execute(ctx: &CliContext, args: &ListingsArgs) -> Result<(), CliError> {
    println!("{}", render(ctx, args).await?);
    Ok(())
}
