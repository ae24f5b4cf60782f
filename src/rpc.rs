//! Blocking JSON-RPC client for the node's block interface
//!
//! Covers the three calls the pipeline needs: `getblockchaininfo` for
//! the current chain height, `getblockhash` to resolve a height to a
//! block identifier, and `getblock` for the block metadata itself.
//!
//! All calls block the caller and fail fast: a transport failure or an
//! `error` member in the response terminates the run. There is no retry
//! policy. A fixed delay between successive block fetches respects the
//! remote rate limit.

use crate::config::{FetchSettings, RpcConfig};
use crate::error::{BlockStatsError, Result};
use crate::types::BlockRecord;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::cell::Cell;

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Vec<Value>,
    id: u64,
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

/// JSON-RPC error member
#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Subset of the `getblockchaininfo` result the pipeline reads
#[derive(Debug, Deserialize)]
struct ChainInfo {
    blocks: u64,
}

/// Blocking client bound to one node endpoint
pub struct RpcClient {
    client: reqwest::blocking::Client,
    config: RpcConfig,
    url: String,
    request_id: Cell<u64>,
}

impl RpcClient {
    /// Create a client for the given node configuration
    pub fn new(config: RpcConfig) -> Self {
        let url = config.endpoint_url();
        Self {
            client: reqwest::blocking::Client::new(),
            config,
            url,
            request_id: Cell::new(1),
        }
    }

    /// Issue a single JSON-RPC call and decode its result
    fn call<T: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> Result<T> {
        let id = self.request_id.get();
        self.request_id.set(id + 1);

        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };

        let response: RpcResponse<T> = self
            .client
            .post(&self.url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .json(&request)
            .send()?
            .json()?;

        if let Some(err) = response.error {
            return Err(BlockStatsError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        response
            .result
            .ok_or_else(|| BlockStatsError::MissingResult(method.to_string()))
    }

    /// Current chain height as reported by `getblockchaininfo`
    pub fn chain_height(&self) -> Result<u64> {
        let info: ChainInfo = self.call("getblockchaininfo", Vec::new())?;
        Ok(info.blocks)
    }

    /// Resolve a height to its block hash
    pub fn block_hash(&self, height: u64) -> Result<String> {
        self.call("getblockhash", vec![json!(height)])
    }

    /// Fetch the metadata record for the block at the given height
    ///
    /// Two calls per block: resolve the height to a hash, then fetch the
    /// block. Only the fields of [`BlockRecord`] are decoded.
    pub fn block_at_height(&self, height: u64) -> Result<BlockRecord> {
        let hash = self.block_hash(height)?;
        self.call("getblock", vec![json!(hash)])
    }

    /// Fetch the most recent blocks in ascending height order
    ///
    /// Resolves the chain tip, then fetches `settings.count` consecutive
    /// blocks ending at the tip, sleeping `settings.delay` between
    /// fetches.
    pub fn fetch_latest_blocks(&self, settings: &FetchSettings) -> Result<Vec<BlockRecord>> {
        let tip = self.chain_height()?;
        let start = tip.saturating_sub(settings.count.saturating_sub(1));
        tracing::info!(tip, start, count = settings.count, "fetching recent blocks");

        let mut records = Vec::with_capacity(settings.count as usize);
        for height in start..=tip {
            let record = self.block_at_height(height)?;
            tracing::debug!(height = record.height, time = record.time, "block fetched");
            records.push(record);
            if height < tip {
                std::thread::sleep(settings.delay);
            }
        }
        Ok(records)
    }
}
