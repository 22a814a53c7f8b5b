//! Catalog handlers - listings, sections and the storefront bundle.

use axum::Json;
use axum::extract::{RawQuery, State};
use storefront_core::{BrowseQuery, CatalogPage, StorefrontView};

use crate::dto::SectionsResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Parse the raw query string; malformed values fall back to defaults.
fn browse_query(raw: Option<&str>) -> BrowseQuery {
    BrowseQuery::from_query_str(raw.unwrap_or_default())
}

/// One page of listings for the requested view.
pub async fn listings(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<CatalogPage>, HttpError> {
    let query = browse_query(raw.as_deref());
    Ok(Json(state.catalog.browse(&query).await?))
}

/// Shop sections. Degrades to an empty list instead of failing.
pub async fn sections(State(state): State<AppState>) -> Json<SectionsResponse> {
    Json(SectionsResponse {
        sections: state.catalog.sections().await,
    })
}

/// Sections plus the first listing page, for the initial render.
pub async fn storefront(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Json<StorefrontView> {
    let query = browse_query(raw.as_deref());
    Json(state.catalog.storefront(&query).await)
}
