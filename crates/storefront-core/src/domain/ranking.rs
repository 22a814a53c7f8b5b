//! Heuristic orderings for views the marketplace API cannot sort natively.
//!
//! # Best sellers
//!
//! The API exposes no sales count. The closest available popularity proxy is
//! the number of users who favorited a listing, so best sellers are ordered by
//! favorites descending, ties broken by views descending.
//!
//! # Trending
//!
//! There is no time-series engagement history either, only a point-in-time
//! snapshot. Trending approximates "rising" listings by favorite velocity:
//!
//! ```text
//! score = (favorites / max(1, days_since_created)) * recency_boost
//! recency_boost = 2.0 (<= 30 days), 1.5 (<= 90 days), 1.0 otherwise
//! ```
//!
//! Both heuristics are deliberate approximations and must stay exactly as
//! described here.
//!
//! All sorts are stable: listings that compare equal keep their input order.

use crate::domain::Listing;
use crate::ports::SortDirection;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days elapsed since `created_at`, floored at one day.
#[allow(clippy::cast_precision_loss)] // Second-level timestamps fit comfortably in f64
fn days_since(created_at: i64, now: i64) -> f64 {
    (now.saturating_sub(created_at) as f64 / SECONDS_PER_DAY).max(1.0)
}

fn recency_boost(days: f64) -> f64 {
    if days <= 30.0 {
        2.0
    } else if days <= 90.0 {
        1.5
    } else {
        1.0
    }
}

/// Compute the trending score of a listing at time `now` (seconds since epoch).
#[allow(clippy::cast_precision_loss)]
pub fn trending_score(listing: &Listing, now: i64) -> f64 {
    let days = days_since(listing.created_at, now);
    let velocity = listing.num_favorers as f64 / days;
    velocity * recency_boost(days)
}

/// Order listings as best sellers: favorites descending, then views descending.
pub fn rank_best_sellers(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| {
        b.num_favorers
            .cmp(&a.num_favorers)
            .then_with(|| b.views.cmp(&a.views))
    });
    listings
}

/// Order listings by trending score at time `now`, highest first.
///
/// Each returned listing carries its computed `score`.
pub fn rank_trending_at(listings: Vec<Listing>, now: i64) -> Vec<Listing> {
    let mut scored: Vec<Listing> = listings
        .into_iter()
        .map(|listing| {
            let score = trending_score(&listing, now);
            Listing {
                score: Some(score),
                ..listing
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .unwrap_or_default()
            .total_cmp(&a.score.unwrap_or_default())
    });
    scored
}

/// Order listings by trending score as of the current time.
pub fn rank_trending(listings: Vec<Listing>) -> Vec<Listing> {
    rank_trending_at(listings, chrono::Utc::now().timestamp())
}

/// Order listings by creation time, newest first.
pub fn rank_newest(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listings
}

/// Order listings by unit price.
pub fn rank_by_price(mut listings: Vec<Listing>, direction: SortDirection) -> Vec<Listing> {
    listings.sort_by(|a, b| match direction {
        SortDirection::Asc => a.price.total_cmp(&b.price),
        SortDirection::Desc => b.price.total_cmp(&a.price),
    });
    listings
}
