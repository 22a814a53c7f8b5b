//! Commands enum and per-command arguments.

use clap::{Args, Subcommand};
use storefront_core::RawBrowseParams;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the storefront web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "STOREFRONT_PORT", default_value_t = 3000)]
        port: u16,
        /// Allowed CORS origin (repeatable); all origins are allowed when omitted
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },

    /// Print a page of listings as JSON
    Listings(ListingsArgs),

    /// Print the shop sections as JSON
    Sections,

    /// Print the canonical form of a storefront query string
    Query {
        /// Query string, with or without a leading '?'
        #[arg(default_value = "")]
        raw: String,
    },
}

/// Browse options, in the same form the web query string uses.
///
/// Values are parsed leniently: anything malformed falls back to its default.
#[derive(Debug, Clone, Default, Args)]
pub struct ListingsArgs {
    /// Free-text search term
    #[arg(long)]
    pub q: Option<String>,
    /// Comma-separated section ids
    #[arg(long)]
    pub sections: Option<String>,
    /// Sort mode: newest, price_asc or price_desc
    #[arg(long)]
    pub sort: Option<String>,
    /// Quick filter: new, best or trending
    #[arg(long)]
    pub pill: Option<String>,
    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<String>,
}

impl ListingsArgs {
    pub fn raw_params(&self) -> RawBrowseParams {
        RawBrowseParams {
            q: self.q.clone(),
            sections: self.sections.clone(),
            sort: self.sort.clone(),
            pill: self.pill.clone(),
            page: self.page.clone(),
        }
    }
}
