use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use career_guide::cli::{self, Cli};
use career_guide::config::Config;

fn main() -> Result<()> {
    // Load configuration first so logging honors RUST_LOG from .env
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Guide v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    cli::run(cli, config)
}
