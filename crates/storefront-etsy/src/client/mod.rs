//! Etsy client: request execution, retries and caching.

mod listings;
mod shop;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::{ResponseCache, ShopIdCache};
use crate::config::EtsyClientConfig;
use crate::error::{EtsyError, EtsyResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::retry::{Decision, RetryPolicy};
use crate::url::build_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Etsy client using the reqwest HTTP backend.
pub type DefaultEtsyClient = EtsyClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Etsy Open API v3.
///
/// Generic over the HTTP backend so request handling can be tested without a
/// network. Use `DefaultEtsyClient` in production and interact with it
/// through `MarketplacePort`.
///
/// The resolved shop id and cached responses belong to the client instance.
pub struct EtsyClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: EtsyClientConfig,
    retry: RetryPolicy,
    shop_id: ShopIdCache,
    responses: ResponseCache,
}

impl DefaultEtsyClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built. A missing API key is not an error here; requests report it.
    pub fn new(config: &EtsyClientConfig) -> EtsyResult<Self> {
        build_url(&config.base_url, "")?;
        let backend = ReqwestBackend::new(config)?;
        Ok(EtsyClient::from_parts(config.clone(), backend))
    }
}

impl<B: HttpBackend> EtsyClient<B> {
    fn from_parts(config: EtsyClientConfig, backend: B) -> Self {
        Self {
            retry: RetryPolicy::from_config(&config),
            backend,
            config,
            shop_id: ShopIdCache::default(),
            responses: ResponseCache::default(),
        }
    }

    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(config: EtsyClientConfig, backend: B) -> Self {
        Self::from_parts(config, backend)
    }

    /// Fetch `path` and decode it as JSON, serving from the response cache
    /// when a fresh entry exists. Only successfully decoded bodies are cached.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        ttl: Duration,
    ) -> EtsyResult<T> {
        if let Some(body) = self.responses.get(path).await {
            debug!(path, "Etsy response cache hit");
            return Ok(serde_json::from_str(&body)?);
        }

        let body = self.fetch_with_retry(path).await?;
        let value = serde_json::from_str(&body)?;
        self.responses.insert(path, body, ttl).await;
        Ok(value)
    }

    /// Issue a GET for `path`, retrying transient failures per the policy.
    async fn fetch_with_retry(&self, path: &str) -> EtsyResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(EtsyError::MissingApiKey)?;
        let url = build_url(&self.config.base_url, path)?;

        let mut state = self.retry.start();
        loop {
            let outcome = self.backend.get(&url, api_key).await;
            match state.next(outcome, path) {
                Decision::Done(body) => return Ok(body),
                Decision::Retry { delay, reason } => {
                    debug!(
                        path,
                        %reason,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        next_attempt = state.attempts(),
                        "Retrying Etsy request"
                    );
                    tokio::time::sleep(delay).await;
                }
                Decision::Fail(err) => return Err(err),
            }
        }
    }
}
