//! Canonical browse query.
//!
//! Raw request parameters are ambiguous: keys may arrive in any order, values
//! may be malformed, and defaults may be spelled out or omitted. This module
//! parses them into a [`BrowseQuery`] and serializes that back into a single
//! deterministic query string (`q`, `sections`, `sort`, `pill`, `page`), which
//! doubles as the cache key and the shareable URL for a view.
//!
//! Malformed input always degrades to a default, never to an error.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of listings shown per catalog page.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

// ============================================================================
// Sort Mode
// ============================================================================

/// Sort options exposed to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Most recently created first (default)
    #[default]
    Newest,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

impl SortMode {
    /// Get the query-string value for this sort mode.
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }

    /// Parse a query-string value. Unknown values yield `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(Self::Newest),
            "price_asc" => Some(Self::PriceAsc),
            "price_desc" => Some(Self::PriceDesc),
            _ => None,
        }
    }

    /// Whether this is one of the price orderings.
    pub const fn is_price(self) -> bool {
        matches!(self, Self::PriceAsc | Self::PriceDesc)
    }
}

// ============================================================================
// Pill
// ============================================================================

/// Quick-filter shortcuts shown above the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pill {
    /// Newest arrivals
    New,
    /// Best sellers (ranked locally)
    Best,
    /// Trending (ranked locally)
    Trending,
}

impl Pill {
    /// Get the query-string value for this pill.
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Best => "best",
            Self::Trending => "trending",
        }
    }

    /// Parse a query-string value. Unknown values yield `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Self::New),
            "best" => Some(Self::Best),
            "trending" => Some(Self::Trending),
            _ => None,
        }
    }

    /// The in-memory ranking that serves this pill, if any.
    pub const fn ranked_view(self) -> Option<RankedView> {
        match self {
            Self::New => None,
            Self::Best => Some(RankedView::BestSellers),
            Self::Trending => Some(RankedView::Trending),
        }
    }

    /// Whether this pill is served by an in-memory ranking pass.
    pub const fn is_ranked(self) -> bool {
        self.ranked_view().is_some()
    }
}

/// Views the marketplace cannot sort natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankedView {
    /// Favorites, then views, descending
    BestSellers,
    /// Favorite velocity with a recency boost
    Trending,
}

impl RankedView {
    /// Label used in log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BestSellers => "best",
            Self::Trending => "trending",
        }
    }
}

// ============================================================================
// Raw Parameters
// ============================================================================

/// Unvalidated browse parameters, exactly as they arrived.
///
/// Deserializable straight from an HTTP query string. Every field is kept as
/// text so that validation happens in one place, [`BrowseQuery::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawBrowseParams {
    /// Free-text search term
    pub q: Option<String>,
    /// Comma-separated section IDs
    pub sections: Option<String>,
    /// Sort mode
    pub sort: Option<String>,
    /// Quick-filter pill
    pub pill: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
}

impl RawBrowseParams {
    /// Collect raw parameters from decoded key/value pairs.
    ///
    /// Unknown keys are ignored. When a key repeats, the first value wins, so
    /// `sort=price_asc&sort=price_desc` sorts ascending.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut raw.q,
                "sections" => &mut raw.sections,
                "sort" => &mut raw.sort,
                "pill" => &mut raw.pill,
                "page" => &mut raw.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }

    /// Collect raw parameters from an encoded query string.
    ///
    /// A leading `?` is accepted.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }
}

// ============================================================================
// Browse Query
// ============================================================================

/// The canonical shape of a catalog browsing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseQuery {
    /// Trimmed free-text term (empty when absent)
    pub term: String,
    /// Selected sections; ordered so serialization is stable
    pub section_ids: BTreeSet<u64>,
    /// Sort mode
    pub sort: SortMode,
    /// Active quick-filter pill
    pub pill: Option<Pill>,
    /// 1-based page number
    pub page: u32,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            section_ids: BTreeSet::new(),
            sort: SortMode::Newest,
            pill: None,
            page: 1,
        }
    }
}

impl BrowseQuery {
    /// Parse raw parameters into a canonical query.
    pub fn parse(raw: &RawBrowseParams) -> Self {
        let term = raw.q.as_deref().map(str::trim).unwrap_or_default().to_string();

        let section_ids = raw
            .sections
            .as_deref()
            .map(parse_section_ids)
            .unwrap_or_default();

        let sort = raw
            .sort
            .as_deref()
            .and_then(SortMode::from_param)
            .unwrap_or_default();

        let pill = raw.pill.as_deref().and_then(Pill::from_param);

        // Whole-value integers only: `2abc` and `3.7` fall back to page 1
        // rather than being truncated to a numeric prefix.
        let page = raw
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        Self {
            term,
            section_ids,
            sort,
            pill,
            page,
        }
    }

    /// Parse an encoded query string into a canonical query.
    pub fn from_query_str(query: &str) -> Self {
        Self::parse(&RawBrowseParams::from_query_str(query))
    }

    /// Serialize to the canonical query string, without a leading `?`.
    ///
    /// Keys appear in the fixed order `q`, `sections`, `sort`, `pill`, `page`
    /// and each is omitted when it holds its default value.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(5);

        if !self.term.is_empty() {
            parts.push(format!("q={}", urlencoding::encode(&self.term)));
        }

        if !self.section_ids.is_empty() {
            let joined = self
                .section_ids
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            parts.push(format!("sections={joined}"));
        }

        if self.sort != SortMode::Newest {
            parts.push(format!("sort={}", self.sort.as_param()));
        }

        if let Some(pill) = self.pill {
            parts.push(format!("pill={}", pill.as_param()));
        }

        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }

        parts.join("&")
    }

    /// Serialize to a link target: `?` plus the canonical query string, or an
    /// empty string when every field holds its default.
    pub fn href(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            query
        } else {
            format!("?{query}")
        }
    }

    /// The in-memory ranking serving this view, if any.
    pub fn ranked_view(&self) -> Option<RankedView> {
        self.pill.and_then(Pill::ranked_view)
    }

    /// Whether this view is served by an in-memory ranking pass.
    pub fn is_ranked_view(&self) -> bool {
        self.ranked_view().is_some()
    }

    /// Apply a pill change.
    ///
    /// Selecting any pill forces the `newest` sort, since price ordering and
    /// pills are mutually exclusive. Clearing the pill leaves the sort alone.
    #[must_use]
    pub fn with_pill(&self, pill: Option<Pill>) -> Self {
        let sort = if pill.is_some() {
            SortMode::Newest
        } else {
            self.sort
        };

        Self {
            sort,
            pill,
            page: 1,
            ..self.clone()
        }
    }

    /// Apply a sort change.
    ///
    /// Price orderings clear the pill. Switching back to `newest` keeps the
    /// pill only when it is `new`.
    #[must_use]
    pub fn with_sort(&self, sort: SortMode) -> Self {
        let pill = match sort {
            SortMode::PriceAsc | SortMode::PriceDesc => None,
            SortMode::Newest => self.pill.filter(|p| *p == Pill::New),
        };

        Self {
            sort,
            pill,
            page: 1,
            ..self.clone()
        }
    }

    /// Toggle a section: added if absent, removed if present.
    ///
    /// Section IDs are always positive; a zero ID is ignored.
    #[must_use]
    pub fn toggle_section(&self, section_id: u64) -> Self {
        let mut section_ids = self.section_ids.clone();
        if section_id != 0 && !section_ids.remove(&section_id) {
            section_ids.insert(section_id);
        }

        Self {
            section_ids,
            page: 1,
            ..self.clone()
        }
    }

    /// Replace the search term.
    #[must_use]
    pub fn with_term(&self, term: &str) -> Self {
        Self {
            term: term.trim().to_string(),
            page: 1,
            ..self.clone()
        }
    }

    /// Move to another page, keeping every filter. Pages below 1 clamp to 1.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Reset every filter to its default.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Zero-based offset of the first listing on this page.
    pub const fn offset(&self, page_size: u32) -> u32 {
        self.page.saturating_sub(1).saturating_mul(page_size)
    }
}

impl fmt::Display for BrowseQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Parse a comma-separated list of positive integers, dropping anything else.
fn parse_section_ids(raw: &str) -> BTreeSet<u64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<u64>().ok())
        .filter(|id| *id > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(s: &str) -> BrowseQuery {
        BrowseQuery::from_query_str(s)
    }

    #[test]
    fn test_defaults_when_empty() {
        let q = query("");
        assert_eq!(q, BrowseQuery::default());
        assert_eq!(q.to_query_string(), "");
        assert_eq!(q.href(), "");
    }

    #[test]
    fn test_term_is_trimmed() {
        assert_eq!(query("q=%20%20mugs%20").term, "mugs");
        assert_eq!(query("q=%20%20%20").term, "");
        assert_eq!(query("q=gift+wrap").term, "gift wrap");
    }

    #[test]
    fn test_sections_drop_malformed_entries() {
        let q = query("sections=5,abc,-2,0,3,,5,%203");
        assert_eq!(q.section_ids.into_iter().collect::<Vec<_>>(), vec![3, 5]);
    }

    #[test]
    fn test_unknown_sort_defaults_to_newest() {
        assert_eq!(query("sort=price_asc").sort, SortMode::PriceAsc);
        assert_eq!(query("sort=price_desc").sort, SortMode::PriceDesc);
        assert_eq!(query("sort=popular").sort, SortMode::Newest);
        assert_eq!(query("sort=").sort, SortMode::Newest);
    }

    #[test]
    fn test_unknown_pill_is_absent() {
        assert_eq!(query("pill=trending").pill, Some(Pill::Trending));
        assert_eq!(query("pill=hot").pill, None);
    }

    #[test]
    fn test_page_parsing() {
        assert_eq!(query("page=3").page, 3);
        assert_eq!(query("page=0").page, 1);
        assert_eq!(query("page=-4").page, 1);
        assert_eq!(query("page=two").page, 1);
        assert_eq!(query("").page, 1);
    }

    #[test]
    fn test_page_with_trailing_garbage_is_not_truncated() {
        assert_eq!(query("page=2abc").page, 1);
        assert_eq!(query("page=3.7").page, 1);
        assert_eq!(query("page=%204%20").page, 4);
    }

    #[test]
    fn test_first_value_wins_for_repeated_keys() {
        assert_eq!(query("page=2&page=7").page, 2);
        assert_eq!(
            query("sort=price_asc&sort=price_desc").sort,
            SortMode::PriceAsc
        );
    }

    #[test]
    fn test_serialization_order_and_omission() {
        let q = BrowseQuery {
            term: "gift wrap".to_string(),
            section_ids: [42, 7].into_iter().collect(),
            sort: SortMode::PriceDesc,
            pill: None,
            page: 3,
        };
        assert_eq!(
            q.to_query_string(),
            "q=gift%20wrap&sections=7,42&sort=price_desc&page=3"
        );
        assert_eq!(q.href(), "?q=gift%20wrap&sections=7,42&sort=price_desc&page=3");
        assert_eq!(q.to_string(), q.to_query_string());
    }

    #[test]
    fn test_serialization_is_stable_across_key_order() {
        let a = query("page=2&pill=best&sections=9,1&q=cards");
        let b = query("q=cards&sections=1,9,1&page=2&pill=best");
        assert_eq!(a.to_query_string(), b.to_query_string());
        assert_eq!(a.to_query_string(), "q=cards&sections=1,9&pill=best&page=2");
    }

    #[test]
    fn test_round_trip_of_canonical_queries() {
        let cases = [
            BrowseQuery::default(),
            BrowseQuery {
                term: "50% off & more".to_string(),
                section_ids: [3, 11].into_iter().collect(),
                sort: SortMode::PriceAsc,
                pill: None,
                page: 4,
            },
            BrowseQuery {
                pill: Some(Pill::Trending),
                ..BrowseQuery::default()
            },
        ];

        for original in cases {
            let parsed = BrowseQuery::from_query_str(&original.to_query_string());
            assert_eq!(parsed, original);
        }
    }

    #[test]
    fn test_section_toggle_is_idempotent() {
        let start = query("sections=2,5");
        let toggled = start.toggle_section(9);
        assert!(toggled.section_ids.contains(&9));

        let back = toggled.toggle_section(9);
        assert_eq!(back.section_ids, start.section_ids);

        let removed = start.toggle_section(5);
        assert_eq!(removed.section_ids.into_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_toggle_ignores_zero() {
        let start = query("sections=2");
        assert_eq!(start.toggle_section(0).section_ids, start.section_ids);
    }

    #[test]
    fn test_transitions_reset_page() {
        let start = query("page=5");
        assert_eq!(start.with_pill(Some(Pill::New)).page, 1);
        assert_eq!(start.with_pill(None).page, 1);
        assert_eq!(start.with_sort(SortMode::PriceAsc).page, 1);
        assert_eq!(start.toggle_section(4).page, 1);
        assert_eq!(start.with_term("x").page, 1);
        assert_eq!(start.cleared().page, 1);
    }

    #[test]
    fn test_pill_forces_newest_sort() {
        let start = query("sort=price_desc");
        for pill in [Pill::New, Pill::Best, Pill::Trending] {
            let next = start.with_pill(Some(pill));
            assert_eq!(next.sort, SortMode::Newest);
            assert_eq!(next.pill, Some(pill));
        }
    }

    #[test]
    fn test_clearing_pill_keeps_other_fields() {
        let start = query("q=cards&sections=4&pill=best&page=2");
        let next = start.with_pill(None);
        assert_eq!(next.pill, None);
        assert_eq!(next.term, "cards");
        assert_eq!(next.section_ids, start.section_ids);
        assert_eq!(next.sort, SortMode::Newest);
    }

    #[test]
    fn test_price_sort_clears_pill() {
        for pill in ["new", "best", "trending"] {
            let start = query(&format!("pill={pill}"));
            assert_eq!(start.with_sort(SortMode::PriceAsc).pill, None);
            assert_eq!(start.with_sort(SortMode::PriceDesc).pill, None);
        }
    }

    #[test]
    fn test_newest_sort_keeps_only_new_pill() {
        assert_eq!(
            query("pill=new").with_sort(SortMode::Newest).pill,
            Some(Pill::New)
        );
        assert_eq!(query("pill=best").with_sort(SortMode::Newest).pill, None);
        assert_eq!(query("pill=trending").with_sort(SortMode::Newest).pill, None);
    }

    #[test]
    fn test_clear_all() {
        let start = query("q=cards&sections=4,5&sort=price_asc&page=9");
        assert_eq!(start.cleared(), BrowseQuery::default());
    }

    #[test]
    fn test_with_page_clamps() {
        assert_eq!(query("q=a").with_page(0).page, 1);
        assert_eq!(query("q=a").with_page(6).page, 6);
    }

    #[test]
    fn test_offset() {
        assert_eq!(query("").offset(24), 0);
        assert_eq!(query("page=3").offset(24), 48);
    }

    #[test]
    fn test_ranked_view() {
        assert!(query("pill=best").is_ranked_view());
        assert!(query("pill=trending").is_ranked_view());
        assert!(!query("pill=new").is_ranked_view());
        assert!(!query("").is_ranked_view());
    }

    #[test]
    fn test_pill_ranked_views() {
        assert_eq!(Pill::Best.ranked_view(), Some(RankedView::BestSellers));
        assert_eq!(Pill::Trending.ranked_view(), Some(RankedView::Trending));
        assert_eq!(Pill::New.ranked_view(), None);
        assert_eq!(query("pill=new").ranked_view(), None);
    }

    #[test]
    fn test_raw_params_from_query_str_accepts_question_mark() {
        let raw = RawBrowseParams::from_query_str("?q=x&unknown=1");
        assert_eq!(raw.q.as_deref(), Some("x"));
        assert_eq!(raw.page, None);
    }
}
