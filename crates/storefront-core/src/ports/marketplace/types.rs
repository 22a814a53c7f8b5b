//! Core-owned DTOs for marketplace operations.
//!
//! These types cross the boundary between `storefront-etsy` and consumers.
//! They carry only what the catalog needs, not marketplace API details.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{DEFAULT_PAGE_SIZE, Listing};

/// Listing attribute the marketplace sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Creation time (default)
    #[default]
    Created,
    /// Unit price
    Price,
    /// Marketplace relevance score
    Score,
}

impl SortField {
    /// Get the API parameter value for this sort field.
    pub const fn as_api_param(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Price => "price",
            Self::Score => "score",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first (default)
    #[default]
    Desc,
}

impl SortDirection {
    /// Get the API parameter value for this direction.
    pub const fn as_api_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Options for fetching a page of listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsRequest {
    /// Keyword filter
    pub term: Option<String>,
    /// Section filter; listings in any of these sections match
    pub section_ids: BTreeSet<u64>,
    /// Sort field
    pub sort_field: SortField,
    /// Sort direction
    pub sort_direction: SortDirection,
    /// Page number (1-indexed)
    pub page: u32,
    /// Listings per page
    pub page_size: u32,
}

impl Default for ListingsRequest {
    fn default() -> Self {
        Self {
            term: None,
            section_ids: BTreeSet::new(),
            sort_field: SortField::Created,
            sort_direction: SortDirection::Desc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingsRequest {
    /// Create a new request with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword filter. Blank terms clear it.
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.term = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    /// Set the section filter.
    #[must_use]
    pub fn with_sections(mut self, section_ids: impl IntoIterator<Item = u64>) -> Self {
        self.section_ids = section_ids.into_iter().collect();
        self
    }

    /// Set sort options.
    #[must_use]
    pub const fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    /// Set the page number and size.
    #[must_use]
    pub const fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Zero-based offset of the first listing on the requested page.
    pub const fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// A page of listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingsPage {
    /// Listings on this page
    pub listings: Vec<Listing>,
    /// Total number of matching listings reported by the marketplace
    pub total: u64,
}
