//! # blockstats-rs: Block Solve-Time and Difficulty Statistics
//!
//! A one-operator analysis utility that fetches recent block metadata
//! from a blockchain node over JSON-RPC, persists it to a flat CSV file,
//! and renders descriptive charts (solve-time distribution, difficulty
//! trend, difficulty-algorithm comparison) in a native window.
//!
//! ## Architecture
//!
//! A linear pipeline with no shared state:
//!
//! - **rpc**: blocking JSON-RPC client fetching N consecutive blocks
//! - **store**: CSV persistence of the fetched records
//! - **analysis**: difficulty decoding, solve-time derivation, bucketing
//! - **chart**: eframe/egui window rendering one chart per invocation
//!
//! ## Example
//!
//! ```ignore
//! use blockstats_rs::{
//!     config::{FetchSettings, NetworkProfile},
//!     rpc::RpcClient,
//!     store,
//! };
//!
//! let client = RpcClient::new(NetworkProfile::Testnet.rpc_config());
//! let settings = FetchSettings::default();
//! let records = client.fetch_latest_blocks(&settings)?;
//! store::write_records(&settings.output, &records)?;
//! # Ok::<(), blockstats_rs::BlockStatsError>(())
//! ```

pub mod analysis;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod rpc;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use chart::ChartKind;
pub use config::{FetchSettings, NetworkProfile, RpcConfig};
pub use error::{BlockStatsError, Result};
pub use rpc::RpcClient;
pub use types::BlockRecord;
