//! Public configuration for the Etsy client.

use std::time::Duration;

/// Default Etsy Open API v3 base URL.
pub const DEFAULT_BASE_URL: &str = "https://openapi.etsy.com/v3/application";

/// Default shop whose catalog is served.
pub const DEFAULT_SHOP_NAME: &str = "designthathits";

/// Configuration for the Etsy client.
///
/// Use the builder methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use storefront_etsy::EtsyClientConfig;
/// use std::time::Duration;
///
/// let config = EtsyClientConfig::new()
///     .with_api_key("keystring")
///     .with_timeout(Duration::from_secs(10))
///     .with_max_retries(2);
/// ```
#[derive(Debug, Clone)]
pub struct EtsyClientConfig {
    /// Base URL for the Etsy API, without a trailing slash
    pub(crate) base_url: String,
    /// API keystring; requests fail fast when absent
    pub(crate) api_key: Option<String>,
    /// Shop name resolved to a shop id on first use
    pub(crate) shop_name: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// Retries after the first attempt
    pub(crate) max_retries: u8,
    /// Backoff for network failures and 5xx responses
    pub(crate) network_base_delay: Duration,
    pub(crate) network_max_delay: Duration,
    /// Backoff for 429 responses without a usable `Retry-After`
    pub(crate) rate_limit_base_delay: Duration,
    pub(crate) rate_limit_max_delay: Duration,
    /// Longest server-requested `Retry-After` wait that is honored as given
    pub(crate) max_retry_after: Duration,
    /// How long section responses stay cached
    pub(crate) sections_ttl: Duration,
    /// How long listing responses stay cached
    pub(crate) listings_ttl: Duration,
    /// Number of listings fetched for in-memory ranking (API maximum is 100)
    pub(crate) ranking_batch_size: u32,
}

impl Default for EtsyClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            user_agent: concat!("storefront-etsy/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            network_base_delay: Duration::from_millis(500),
            network_max_delay: Duration::from_millis(4000),
            rate_limit_base_delay: Duration::from_millis(1000),
            rate_limit_max_delay: Duration::from_millis(8000),
            max_retry_after: Duration::from_secs(60),
            sections_ttl: Duration::from_secs(30 * 60),
            listings_ttl: Duration::from_secs(10 * 60),
            ranking_batch_size: 100,
        }
    }
}

impl EtsyClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Etsy API.
    ///
    /// Defaults to `https://openapi.etsy.com/v3/application`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the API keystring.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set an optional API keystring. Blank keys count as missing.
    #[must_use]
    pub fn with_optional_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Set the shop name.
    #[must_use]
    pub fn with_shop_name(mut self, shop_name: impl Into<String>) -> Self {
        self.shop_name = shop_name.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries after the first attempt.
    ///
    /// Defaults to 3 retries (4 attempts in total).
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the backoff for network failures and server errors.
    ///
    /// Defaults to 500ms doubling up to 4s.
    #[must_use]
    pub const fn with_network_backoff(mut self, base: Duration, max: Duration) -> Self {
        self.network_base_delay = base;
        self.network_max_delay = max;
        self
    }

    /// Set the fallback backoff for rate-limited responses.
    ///
    /// Defaults to 1s doubling up to 8s.
    #[must_use]
    pub const fn with_rate_limit_backoff(mut self, base: Duration, max: Duration) -> Self {
        self.rate_limit_base_delay = base;
        self.rate_limit_max_delay = max;
        self
    }

    /// Set the ceiling on `Retry-After` waits.
    ///
    /// Longer server-requested waits are shortened to this. Defaults to 60s.
    #[must_use]
    pub const fn with_max_retry_after(mut self, max: Duration) -> Self {
        self.max_retry_after = max;
        self
    }

    /// Set how long section and listing responses stay cached.
    ///
    /// A zero duration disables caching for that kind of response.
    #[must_use]
    pub const fn with_cache_ttls(mut self, sections: Duration, listings: Duration) -> Self {
        self.sections_ttl = sections;
        self.listings_ttl = listings;
        self
    }

    /// Whether an API key is configured.
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The configured shop name.
    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }
}
