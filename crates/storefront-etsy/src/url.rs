//! URL construction helpers for the Etsy API.
//!
//! Builders return paths relative to the configured base URL. The path string
//! doubles as the response cache key, so parameter order is fixed.

use storefront_core::ListingsRequest;
use url::Url;

use crate::error::EtsyResult;

/// Largest page the listings endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Join a relative path onto the base URL.
pub fn build_url(base_url: &str, path: &str) -> EtsyResult<Url> {
    Ok(Url::parse(&format!("{}{path}", base_url.trim_end_matches('/')))?)
}

/// `GET /shops/{shop_name}`
pub fn shop_path(shop_name: &str) -> String {
    format!("/shops/{}", urlencoding::encode(shop_name))
}

/// `GET /shops/{shop_id}/sections`
pub fn sections_path(shop_id: u64) -> String {
    format!("/shops/{shop_id}/sections")
}

/// `GET /shops/{shop_id}/listings/active` for one page of a native query.
///
/// The API filters by at most one section. With several sections requested
/// no section parameter is sent and the caller filters locally.
pub fn listings_path(shop_id: u64, request: &ListingsRequest) -> String {
    let mut query = format!(
        "limit={}&offset={}&includes=Images&sort_on={}&sort_order={}",
        request.page_size.clamp(1, MAX_PAGE_SIZE),
        request.offset(),
        request.sort_field.as_api_param(),
        request.sort_direction.as_api_param(),
    );

    if let Some(term) = request.term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        query.push_str("&keywords=");
        query.push_str(&urlencoding::encode(term));
    }

    if request.section_ids.len() == 1 {
        if let Some(section_id) = request.section_ids.first() {
            query.push_str(&format!("&shop_section_id={section_id}"));
        }
    }

    format!("/shops/{shop_id}/listings/active?{query}")
}

/// `GET /shops/{shop_id}/listings/active` for the newest `limit` listings,
/// used as the candidate pool for in-memory ranking.
pub fn ranking_batch_path(shop_id: u64, limit: u32) -> String {
    format!(
        "/shops/{shop_id}/listings/active?limit={}&offset=0&includes=Images&sort_on=created&sort_order=desc",
        limit.clamp(1, MAX_PAGE_SIZE)
    )
}
