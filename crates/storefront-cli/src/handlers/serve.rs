//! Serve command handler.

use anyhow::Result;
use storefront_axum::{ServerConfig, start_server};
use storefront_etsy::EtsyClientConfig;

/// Execute the serve command.
///
/// Runs the web server until interrupted.
pub async fn execute(etsy: EtsyClientConfig, port: u16, allowed_origins: Vec<String>) -> Result<()> {
    let config = ServerConfig::with_etsy(etsy)
        .with_port(port)
        .with_allowed_origins(allowed_origins);

    start_server(config).await
}
