//! Mapping from raw Etsy records to core domain types.

use storefront_core::{Listing, ListingImage, ShopSection};

use crate::models::{EtsyListing, EtsyListingImage, EtsyMoney, EtsyShopSection};

/// Convert an Etsy money value to a unit price.
///
/// A zero divisor is treated as 1.
#[allow(clippy::cast_precision_loss)] // Prices are far below 2^52 minor units
pub fn unit_price(money: &EtsyMoney) -> f64 {
    let divisor = if money.divisor == 0 { 1 } else { money.divisor };
    money.amount as f64 / divisor as f64
}

/// Pick the primary image, falling back to the listing title for alt text.
fn primary_image(images: Option<&[EtsyListingImage]>, title: &str) -> Option<ListingImage> {
    let image = images?.first()?;
    let alt_text = image
        .alt_text
        .as_deref()
        .filter(|alt| !alt.trim().is_empty())
        .unwrap_or(title);

    Some(ListingImage {
        url: image.url_570xn.clone(),
        alt_text: alt_text.to_string(),
    })
}

/// Normalize a raw listing.
pub fn to_listing(raw: EtsyListing) -> Listing {
    let image = primary_image(raw.images.as_deref(), &raw.title);
    let price = unit_price(&raw.price);

    Listing {
        id: raw.listing_id,
        description: raw.description.unwrap_or_default(),
        url: raw.url,
        price,
        currency: raw.price.currency_code,
        num_favorers: raw.num_favorers.unwrap_or(0),
        views: raw.views.unwrap_or(0),
        created_at: raw.created_timestamp,
        updated_at: raw.updated_timestamp,
        section_id: raw.shop_section_id,
        tags: raw.tags.unwrap_or_default(),
        image,
        score: None,
        title: raw.title,
    }
}

/// Normalize a raw shop section.
pub fn to_section(raw: EtsyShopSection) -> ShopSection {
    ShopSection {
        id: raw.shop_section_id,
        title: raw.title,
        count: raw.active_listing_count,
    }
}
