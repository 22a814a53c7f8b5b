//! Main CLI parser and top-level argument handling.

use clap::{Args, Parser};
use storefront_etsy::EtsyClientConfig;

use crate::commands::Commands;

/// Command-line interface for the storefront.
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Serve and inspect an Etsy shop storefront")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub etsy: EtsyArgs,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for reaching the Etsy API.
#[derive(Debug, Clone, Args)]
pub struct EtsyArgs {
    /// Etsy API keystring
    #[arg(long = "api-key", env = "ETSY_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Shop whose catalog is served
    #[arg(long = "shop", env = "ETSY_SHOP_NAME", global = true, default_value = "designthathits")]
    pub shop: String,

    /// Override the Etsy API base URL
    #[arg(long = "api-base-url", env = "ETSY_API_BASE_URL", global = true)]
    pub api_base_url: Option<String>,
}

impl EtsyArgs {
    /// Build the Etsy client configuration from these options.
    pub fn client_config(&self) -> EtsyClientConfig {
        let config = EtsyClientConfig::new()
            .with_optional_api_key(self.api_key.clone())
            .with_shop_name(self.shop.clone());

        match &self.api_base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        }
    }
}
