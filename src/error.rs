//! Error handling for the blockstats-rs application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for blockstats-rs operations
#[derive(Error, Debug)]
pub enum BlockStatsError {
    /// Errors reported by the node's JSON-RPC interface
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// An RPC response arrived without a result or error member
    #[error("RPC response for '{0}' carried no result")]
    MissingResult(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Errors reading or writing the block store
    #[error("Store error: {0}")]
    Store(#[from] csv::Error),

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// The loaded dataset cannot support the requested operation
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Errors opening or running the chart window
    #[error("Chart window error: {0}")]
    Window(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BlockStatsError>,
    },
}

impl BlockStatsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BlockStatsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for blockstats-rs operations
pub type Result<T> = std::result::Result<T, BlockStatsError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlockStatsError::Rpc {
            code: -8,
            message: "Block height out of range".to_string(),
        };
        assert_eq!(err.to_string(), "RPC error -8: Block height out of range");
    }

    #[test]
    fn test_error_with_context() {
        let err = BlockStatsError::Dataset("empty block list".to_string());
        let with_ctx = err.with_context("Failed to derive solve times");
        assert!(with_ctx.to_string().contains("Failed to derive solve times"));
    }

    #[test]
    fn test_missing_result_names_method() {
        let err = BlockStatsError::MissingResult("getblockhash".to_string());
        assert!(err.to_string().contains("getblockhash"));
    }
}
