//! HTTP backend abstraction for the Etsy API.
//!
//! The backend performs exactly one request per call and reports the raw
//! outcome. Retry and backoff decisions live in `retry.rs` and are driven by
//! the client, so they can be tested against a scripted fake backend.

use crate::config::EtsyClientConfig;
use crate::error::{EtsyError, EtsyResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, RETRY_AFTER};
use url::Url;

/// Header carrying the API keystring.
const API_KEY_HEADER: &str = "x-api-key";

// ============================================================================
// Raw Response
// ============================================================================

/// A response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw `Retry-After` header value, if present
    pub retry_after: Option<String>,
    /// Response body text
    pub body: String,
}

impl RawResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can issue authenticated GET requests.
///
/// Any failure to obtain a response is reported as `EtsyError::Transport`.
/// Non-success statuses are returned as ordinary responses.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Issue a single GET request.
    async fn get(&self, url: &Url, api_key: &str) -> EtsyResult<RawResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &EtsyClientConfig) -> EtsyResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| EtsyError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

fn transport(err: &reqwest::Error) -> EtsyError {
    EtsyError::Transport {
        message: err.to_string(),
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &Url, api_key: &str) -> EtsyResult<RawResponse> {
        let response = self
            .client
            .get(url.as_str())
            .header(API_KEY_HEADER, api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport(&e))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(|e| transport(&e))?;

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reqwest_backend_creation() {
        let config = EtsyClientConfig::new();
        assert!(ReqwestBackend::new(&config).is_ok());
    }

    #[test]
    fn test_success_range() {
        let response = |status| RawResponse {
            status,
            retry_after: None,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(301).is_success());
        assert!(!response(429).is_success());
    }

    #[tokio::test]
    async fn test_fake_backend_plays_script_then_repeats_last() {
        let backend = FakeBackend::new().with_script(
            "/shops",
            vec![
                Scripted::status(503, "down"),
                Scripted::json(200, &json!({"shop_id": 1})),
            ],
        );
        let url = Url::parse("https://example.com/shops/x").unwrap();

        assert_eq!(backend.get(&url, "k").await.unwrap().status, 503);
        assert_eq!(backend.get(&url, "k").await.unwrap().status, 200);
        assert_eq!(backend.get(&url, "k").await.unwrap().status, 200);
        assert_eq!(backend.request_count(), 3);
        assert_eq!(backend.sent_keys(), vec!["k", "k", "k"]);
    }

    #[tokio::test]
    async fn test_fake_backend_unmatched_is_404() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://example.com/unknown").unwrap();
        assert_eq!(backend.get(&url, "k").await.unwrap().status, 404);
    }

    #[tokio::test]
    async fn test_fake_backend_transport_failure() {
        let backend = FakeBackend::new().with_response("/", Scripted::network("reset"));
        let url = Url::parse("https://example.com/").unwrap();
        assert!(matches!(
            backend.get(&url, "k").await,
            Err(EtsyError::Transport { .. })
        ));
    }
}
