//! Integration tests for the Axum web server.
//!
//! These tests drive the full router against an in-memory marketplace.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::json;
use storefront_core::{MarketplaceError, SortDirection, SortField};

use common::{FakeMarketplace, app, get, json_body, send};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let response = get(app(Arc::new(FakeMarketplace::default())), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn listings_default_view_uses_native_sort() {
    let marketplace = Arc::new(FakeMarketplace::default());
    let response = get(app(marketplace.clone()), "/api/listings").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 40);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 24);
    assert_eq!(body["query"], "");
    assert_eq!(body["listings"].as_array().unwrap().len(), 2);

    let requests = marketplace.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].sort_field, SortField::Created);
    assert_eq!(requests[0].sort_direction, SortDirection::Desc);
}

#[tokio::test]
async fn listings_query_is_canonicalized() {
    let marketplace = Arc::new(FakeMarketplace::default());
    let response = get(
        app(marketplace.clone()),
        "/api/listings?page=2&sort=price_asc&sections=9,3,bogus&q=%20mugs%20&page=7",
    )
    .await;

    let body = json_body(response).await;
    assert_eq!(body["query"], "q=mugs&sections=3,9&sort=price_asc&page=2");
    assert_eq!(body["page"], 2);

    let requests = marketplace.requests.lock().unwrap();
    assert_eq!(requests[0].term.as_deref(), Some("mugs"));
    assert_eq!(requests[0].sort_field, SortField::Price);
    assert_eq!(requests[0].sort_direction, SortDirection::Asc);
    assert_eq!(requests[0].page, 2);
}

#[tokio::test]
async fn listings_best_sellers_are_ranked_in_memory() {
    let marketplace = Arc::new(FakeMarketplace::default());
    let response = get(app(marketplace.clone()), "/api/listings?pill=best").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let ids: Vec<u64> = body["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(body["total"], 3);
    assert_eq!(body["query"], "pill=best");
    assert!(marketplace.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn listings_trending_carries_scores() {
    let response = get(
        app(Arc::new(FakeMarketplace::default())),
        "/api/listings?pill=trending",
    )
    .await;

    let body = json_body(response).await;
    assert!(
        body["listings"]
            .as_array()
            .unwrap()
            .iter()
            .all(|l| l["score"].is_number())
    );
}

#[tokio::test]
async fn listings_ranked_view_degrades_to_empty() {
    let marketplace = Arc::new(FakeMarketplace::failing(MarketplaceError::Network));
    let response = get(app(marketplace), "/api/listings?pill=trending").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["listings"], json!([]));
}

#[tokio::test]
async fn listings_missing_credential_is_503_with_safe_message() {
    let marketplace = Arc::new(FakeMarketplace::failing(MarketplaceError::MissingCredential));
    let response = get(app(marketplace), "/api/listings").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "The shop is temporarily unavailable. Please check back soon."
    );
    assert_eq!(body["status"], 503);
    assert_eq!(body["code"], "MISSING_CREDENTIAL");
}

#[tokio::test]
async fn listings_error_statuses() {
    let cases = [
        (MarketplaceError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
        (
            MarketplaceError::NotFound {
                resource: "/shops/1".to_string(),
            },
            StatusCode::NOT_FOUND,
        ),
        (MarketplaceError::Network, StatusCode::BAD_GATEWAY),
        (MarketplaceError::Upstream { status: 500 }, StatusCode::BAD_GATEWAY),
        (
            MarketplaceError::Unknown {
                message: "bad json".to_string(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, status) in cases {
        let response = get(
            app(Arc::new(FakeMarketplace::failing(error))),
            "/api/listings",
        )
        .await;
        assert_eq!(response.status(), status);

        let body = json_body(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(!message.contains("/shops/1"));
        assert!(!message.contains("bad json"));
    }
}

#[tokio::test]
async fn sections_endpoint_returns_sections() {
    let response = get(app(Arc::new(FakeMarketplace::default())), "/api/sections").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"sections": [
            {"id": 5, "title": "Mugs", "count": 1},
            {"id": 9, "title": "Cards", "count": 1}
        ]})
    );
}

#[tokio::test]
async fn sections_endpoint_degrades_to_empty() {
    let marketplace = Arc::new(FakeMarketplace::failing(MarketplaceError::RateLimited));
    let response = get(app(marketplace), "/api/sections").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"sections": []}));
}

#[tokio::test]
async fn storefront_bundles_sections_and_first_page() {
    let response = get(app(Arc::new(FakeMarketplace::default())), "/api/storefront").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["sections"].as_array().unwrap().len(), 2);
    assert_eq!(body["initial"]["total"], 40);
}

#[tokio::test]
async fn storefront_ranked_view_has_no_initial_page() {
    let response = get(
        app(Arc::new(FakeMarketplace::default())),
        "/api/storefront?pill=trending",
    )
    .await;

    let body = json_body(response).await;
    assert!(body["initial"].is_null());
    assert_eq!(body["sections"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn storefront_failure_still_renders() {
    let marketplace = Arc::new(FakeMarketplace::failing(MarketplaceError::Network));
    let response = get(app(marketplace), "/api/storefront").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"sections": [], "initial": null})
    );
}

fn contact_request(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn contact_accepts_complete_submission() {
    let response = send(
        app(Arc::new(FakeMarketplace::default())),
        contact_request(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Do you ship abroad?"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"success": true}));
}

#[tokio::test]
async fn contact_rejects_missing_fields() {
    let response = send(
        app(Arc::new(FakeMarketplace::default())),
        contact_request(&json!({"name": "Ada", "email": "  "})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "All fields required.");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn contact_rejects_malformed_json_with_json_error() {
    let response = send(
        app(Arc::new(FakeMarketplace::default())),
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = json_body(response).await;
    assert_eq!(body["error"], "Failed to send message.");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn contact_without_content_type_gets_json_error() {
    let payload = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello"
    });
    let response = send(
        app(Arc::new(FakeMarketplace::default())),
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Failed to send message.");
    assert!(!body.to_string().contains("Content-Type"));
}

#[tokio::test]
async fn contact_rejects_wrongly_typed_fields() {
    let response = send(
        app(Arc::new(FakeMarketplace::default())),
        contact_request(&json!({"name": 5, "email": "a@b.c", "message": "hi"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Failed to send message.");
    assert!(!body.to_string().contains("invalid type"));
}

#[tokio::test]
async fn api_routes_answer_cors_preflight() {
    let response = send(
        app(Arc::new(FakeMarketplace::default())),
        Request::builder()
            .method("OPTIONS")
            .uri("/api/listings")
            .header(header::ORIGIN, "https://shop.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
