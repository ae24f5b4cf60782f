//! Command line interface
//!
//! The original analysis flow was driven by editing calls at the bottom
//! of a script; this replaces it with a small typed command surface:
//! fetch-and-save, load-and-plot, and a solve-time summary.

use crate::chart::{self, ChartKind};
use crate::config::{FetchSettings, NetworkProfile, RpcConfig, DEFAULT_STORE_FILE};
use crate::error::Result;
use crate::rpc::RpcClient;
use crate::{analysis, store};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Block solve-time and difficulty statistics
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands for the CLI
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the most recent blocks from a node and save them to CSV
    Fetch {
        /// Network profile selecting the node endpoint and credentials
        #[arg(long, value_enum, default_value_t = NetworkProfile::Mainnet)]
        network: NetworkProfile,

        /// TOML file overriding the built-in profile
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of most recent blocks to fetch
        #[arg(long, default_value_t = crate::config::DEFAULT_FETCH_COUNT)]
        count: u64,

        /// Delay between block fetches in milliseconds
        #[arg(long, default_value_t = crate::config::DEFAULT_FETCH_DELAY_MS)]
        delay_ms: u64,

        /// Output CSV path
        #[arg(long, default_value = DEFAULT_STORE_FILE)]
        output: PathBuf,
    },

    /// Load saved blocks and open a chart window
    Plot {
        /// The chart to render
        #[arg(value_enum)]
        chart: ChartKind,

        /// Input CSV path
        #[arg(long, default_value = DEFAULT_STORE_FILE)]
        input: PathBuf,
    },

    /// Print the mean solve time of the saved blocks
    Summary {
        /// Input CSV path
        #[arg(long, default_value = DEFAULT_STORE_FILE)]
        input: PathBuf,
    },
}

impl Cli {
    /// Run the selected command to completion
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Fetch {
                network,
                config,
                count,
                delay_ms,
                output,
            } => {
                let rpc_config = match config {
                    Some(path) => RpcConfig::load(&path)?,
                    None => network.rpc_config(),
                };
                tracing::info!(%network, endpoint = %rpc_config.endpoint_url(), "fetching blocks");

                let settings = FetchSettings {
                    count,
                    delay: Duration::from_millis(delay_ms),
                    output,
                };
                let client = RpcClient::new(rpc_config);
                let records = client.fetch_latest_blocks(&settings)?;
                store::write_records(&settings.output, &records)
            }

            Command::Plot { chart, input } => {
                let records = if chart.requires_records() {
                    store::read_records(&input)?
                } else {
                    Vec::new()
                };
                chart::show_chart(chart, records)
            }

            Command::Summary { input } => {
                let records = store::read_records(&input)?;
                let minutes: Vec<f64> = analysis::solve_times(&records)
                    .iter()
                    .map(|s| s.minutes)
                    .collect();

                match analysis::mean(&minutes) {
                    Some(average) => {
                        let first = records.first().and_then(|r| r.time_string());
                        let last = records.last().and_then(|r| r.time_string());
                        if let (Some(first), Some(last)) = (first, last) {
                            println!("blocks from {} to {}", first, last);
                        }
                        println!("mean solve time: {:.2} minutes over {} intervals", average, minutes.len());
                    }
                    None => println!("not enough blocks in {} to derive solve times", input.display()),
                }
                Ok(())
            }
        }
    }
}
