//! Listing and shop section domain types.

use serde::{Deserialize, Serialize};

/// Primary image of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingImage {
    /// Mid-resolution image URL
    pub url: String,
    /// Alt text (falls back to the listing title)
    pub alt_text: String,
}

/// A normalized product listing.
///
/// Listings are rebuilt from the marketplace API on every fetch and are never
/// persisted. The `score` field is only populated by a ranking pass and is
/// absent everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Marketplace listing ID
    pub id: u64,
    /// Listing title
    pub title: String,
    /// Full description (empty when the marketplace sends none)
    pub description: String,
    /// Canonical listing URL on the marketplace
    pub url: String,
    /// Unit price in `currency`
    pub price: f64,
    /// ISO 4217 currency code, passed through from the marketplace
    pub currency: String,
    /// Number of users who favorited the listing
    pub num_favorers: u64,
    /// View count
    pub views: u64,
    /// Creation time (seconds since epoch)
    pub created_at: i64,
    /// Last update time (seconds since epoch)
    pub updated_at: i64,
    /// Shop section the listing belongs to, if any
    pub section_id: Option<u64>,
    /// Listing tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Primary image, if the listing has any images
    pub image: Option<ListingImage>,
    /// Ranking score, set only by the trending ranking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Listing {
    /// Check whether the listing matches a free-text term.
    ///
    /// Matches case-insensitively against the title, the description and
    /// each tag. An empty term matches everything.
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Check whether the listing belongs to one of the given sections.
    pub fn in_any_section<'a>(&self, mut section_ids: impl Iterator<Item = &'a u64>) -> bool {
        self.section_id
            .is_some_and(|id| section_ids.any(|wanted| *wanted == id))
    }
}

/// A shop-defined category grouping a subset of listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSection {
    /// Section ID
    pub id: u64,
    /// Display title
    pub title: String,
    /// Number of active listings in the section
    pub count: u64,
}
