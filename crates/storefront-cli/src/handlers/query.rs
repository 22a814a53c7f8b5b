//! Query command handler.

use storefront_core::BrowseQuery;

/// Canonical form of a raw query string.
pub fn canonicalize(raw: &str) -> String {
    BrowseQuery::from_query_str(raw).to_query_string()
}

/// Execute the query command.
pub fn execute(raw: &str) {
    println!("{}", canonicalize(raw));
}
