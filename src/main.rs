//! Block Statistics - Main Entry Point
//!
//! Fetches recent block metadata from a node, persists it to CSV, and
//! renders descriptive charts.

use blockstats_rs::cli::Cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,blockstats_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
