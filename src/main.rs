//! soko-harness CLI entry point.
//!
//! Sets up logging and hands off to the CLI module.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = soko_harness::cli::parse_cli();

    // RUST_LOG wins over --log-level; both fall back to "info".
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_level.clone());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)))
        .init();

    soko_harness::cli::run_with_cli(cli).await
}
