//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the Etsy adapter is wired into the
//! catalog service for the web adapter.

use std::sync::Arc;

use anyhow::{Context, Result};
use storefront_core::{CatalogService, MarketplacePort};
use storefront_etsy::{DefaultEtsyClient, EtsyClientConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Etsy client configuration.
    pub etsy: EtsyClientConfig,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            etsy: EtsyClientConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create config with defaults for the given Etsy client configuration.
    pub fn with_etsy(etsy: EtsyClientConfig) -> Self {
        Self {
            etsy,
            ..Self::default()
        }
    }

    /// Set the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins. An empty list keeps allow-all.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Catalog service over the marketplace port.
    pub catalog: Arc<CatalogService>,
}

impl AxumContext {
    /// Build a context over any marketplace implementation.
    pub fn from_marketplace(marketplace: Arc<dyn MarketplacePort>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(marketplace)),
        }
    }
}

/// Bootstrap the Axum server with all services.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    if !config.etsy.has_api_key() {
        // The server still starts; listing requests answer 503 until a key is set.
        warn!("ETSY_API_KEY is not set; the catalog will be unavailable");
    }

    let client =
        DefaultEtsyClient::new(&config.etsy).context("Failed to create Etsy client")?;
    let marketplace: Arc<dyn MarketplacePort> = Arc::new(client);

    info!(shop = config.etsy.shop_name(), "Storefront bootstrapped");
    Ok(AxumContext::from_marketplace(marketplace))
}

/// Start the web server and run until Ctrl-C or SIGTERM.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("storefront web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("storefront web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
