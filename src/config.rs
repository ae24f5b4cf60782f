//! Configuration module for blockstats-rs
//!
//! This module handles the node connection configuration:
//! - Built-in network profiles (mainnet, testnet) with fixed credentials
//! - Optional TOML config files overriding the built-in profiles
//! - Fetch settings (block count, inter-fetch delay, output path)
//!
//! There is no process-wide client state: callers build an [`RpcConfig`]
//! here and pass it explicitly to the RPC client.

use crate::error::{BlockStatsError, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default number of blocks fetched per run
pub const DEFAULT_FETCH_COUNT: u64 = 100;

/// Default delay between block fetches in milliseconds
///
/// The node's RPC interface is rate limited; successive fetches back off
/// by this fixed amount.
pub const DEFAULT_FETCH_DELAY_MS: u64 = 200;

/// Default block store file name
pub const DEFAULT_STORE_FILE: &str = "blocks.csv";

/// Predefined network profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NetworkProfile {
    /// Local mainnet node
    #[default]
    Mainnet,
    /// Testnet node on the lab network
    Testnet,
}

impl NetworkProfile {
    /// Get the built-in RPC configuration for this profile
    pub fn rpc_config(&self) -> RpcConfig {
        match self {
            NetworkProfile::Mainnet => RpcConfig {
                user: "bitcoinrpc".to_string(),
                password: "123456".to_string(),
                host: "127.0.0.1".to_string(),
                port: 7116,
            },
            NetworkProfile::Testnet => RpcConfig {
                user: "bitcoinrpc".to_string(),
                password: "123456".to_string(),
                host: "192.168.30.106".to_string(),
                port: 17116,
            },
        }
    }
}

impl std::fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkProfile::Mainnet => write!(f, "mainnet"),
            NetworkProfile::Testnet => write!(f, "testnet"),
        }
    }
}

/// Node RPC endpoint and credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcConfig {
    /// RPC username
    pub user: String,
    /// RPC password
    pub password: String,
    /// Node host name or address
    pub host: String,
    /// Node RPC port
    pub port: u16,
}

impl RpcConfig {
    /// Build the HTTP endpoint URL for this configuration
    pub fn endpoint_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Load an RPC configuration from a TOML file
    ///
    /// A missing or malformed file is an error; this is only called when
    /// the operator explicitly points at a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(BlockStatsError::Io)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| BlockStatsError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Settings for a fetch-and-save run
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Number of most recent blocks to fetch
    pub count: u64,

    /// Fixed delay inserted between successive block fetches
    pub delay: Duration,

    /// Path the fetched records are written to
    pub output: PathBuf,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_FETCH_COUNT,
            delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            output: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_profile_endpoints() {
        let mainnet = NetworkProfile::Mainnet.rpc_config();
        assert_eq!(mainnet.endpoint_url(), "http://127.0.0.1:7116");

        let testnet = NetworkProfile::Testnet.rpc_config();
        assert_eq!(testnet.endpoint_url(), "http://192.168.30.106:17116");
        assert_eq!(testnet.user, "bitcoinrpc");
    }

    #[test]
    fn test_profile_display() {
        assert_eq!(NetworkProfile::Mainnet.to_string(), "mainnet");
        assert_eq!(NetworkProfile::Testnet.to_string(), "testnet");
    }

    #[test]
    fn test_fetch_settings_default() {
        let settings = FetchSettings::default();
        assert_eq!(settings.count, 100);
        assert_eq!(settings.delay, Duration::from_millis(200));
        assert_eq!(settings.output, PathBuf::from("blocks.csv"));
    }

    #[test]
    fn test_config_load_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "user = \"op\"\npassword = \"secret\"\nhost = \"10.0.0.5\"\nport = 8332"
        )
        .unwrap();

        let config = RpcConfig::load(file.path()).unwrap();
        assert_eq!(config.user, "op");
        assert_eq!(config.port, 8332);
        assert_eq!(config.endpoint_url(), "http://10.0.0.5:8332");
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = RpcConfig::load(Path::new("/nonexistent/rpc.toml"));
        assert!(result.is_err());
    }
}
