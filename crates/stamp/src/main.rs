//! stamp - Main Entry Point

use anyhow::Context;
use clap::Parser;
use stamp::cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config();
    let report = stamp::run(&config)
        .with_context(|| format!("failed to render {}", config.output.display()))?;

    tracing::debug!(?report, "done");
    Ok(())
}
