//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use storefront_cli::{Cli, CliError, Commands, bootstrap, handlers};

/// Install the fmt subscriber on stderr.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `info`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let etsy = cli.etsy.client_config();

    match command {
        Commands::Serve {
            port,
            allowed_origins,
        } => {
            handlers::serve::execute(etsy, port, allowed_origins).await?;
        }
        Commands::Listings(args) => {
            let ctx = bootstrap(&etsy)?;
            handlers::listings::execute(&ctx, &args).await?;
        }
        Commands::Sections => {
            let ctx = bootstrap(&etsy)?;
            handlers::sections::execute(&ctx).await?;
        }
        Commands::Query { raw } => {
            handlers::query::execute(&raw);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so clap's env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
