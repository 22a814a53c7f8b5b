//! Shared fixtures for route tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use storefront_axum::{AxumContext, CorsConfig, create_router};
use storefront_core::{
    Listing, ListingsPage, ListingsRequest, MarketplaceError, MarketplacePort, MarketplaceResult,
    ShopSection,
};
use tower::ServiceExt;

pub fn listing(id: u64, favorites: u64, views: u64) -> Listing {
    Listing {
        id,
        title: format!("Listing {id}"),
        description: String::new(),
        url: format!("https://www.etsy.com/listing/{id}"),
        price: 10.0,
        currency: "USD".to_string(),
        num_favorers: favorites,
        views,
        created_at: 1_700_000_000,
        updated_at: 1_700_000_000,
        section_id: None,
        tags: Vec::new(),
        image: None,
        score: None,
    }
}

pub fn section(id: u64, title: &str) -> ShopSection {
    ShopSection {
        id,
        title: title.to_string(),
        count: 1,
    }
}

/// In-memory marketplace with canned answers.
pub struct FakeMarketplace {
    pub page: MarketplaceResult<ListingsPage>,
    pub batch: MarketplaceResult<Vec<Listing>>,
    pub sections: MarketplaceResult<Vec<ShopSection>>,
    pub requests: Mutex<Vec<ListingsRequest>>,
}

impl Default for FakeMarketplace {
    fn default() -> Self {
        Self {
            page: Ok(ListingsPage {
                listings: vec![listing(1, 0, 0), listing(2, 0, 0)],
                total: 40,
            }),
            batch: Ok(vec![listing(1, 5, 10), listing(2, 5, 20), listing(3, 9, 1)]),
            sections: Ok(vec![section(5, "Mugs"), section(9, "Cards")]),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl FakeMarketplace {
    pub fn failing(error: MarketplaceError) -> Self {
        Self {
            page: Err(error.clone()),
            batch: Err(error.clone()),
            sections: Err(error),
            ..Self::default()
        }
    }
}

#[async_trait]
impl MarketplacePort for FakeMarketplace {
    async fn fetch_listings(&self, request: &ListingsRequest) -> MarketplaceResult<ListingsPage> {
        self.requests.lock().unwrap().push(request.clone());
        self.page.clone()
    }

    async fn fetch_ranking_batch(
        &self,
        section_ids: &BTreeSet<u64>,
    ) -> MarketplaceResult<Vec<Listing>> {
        self.batch.clone().map(|listings| {
            listings
                .into_iter()
                .filter(|l| section_ids.is_empty() || l.in_any_section(section_ids.iter()))
                .collect()
        })
    }

    async fn fetch_sections(&self) -> MarketplaceResult<Vec<ShopSection>> {
        self.sections.clone()
    }
}

pub fn app(marketplace: Arc<FakeMarketplace>) -> Router {
    create_router(
        AxumContext::from_marketplace(marketplace),
        &CorsConfig::AllowAll,
    )
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
