//! Core data types for blockstats-rs
//!
//! This module contains the fundamental data structures used throughout
//! the application for representing block metadata.
//!
//! # Main Types
//!
//! - [`BlockRecord`] - Metadata for a single block (height, difficulty,
//!   timestamps)
//!
//! Records are immutable once fetched: the node is the source of truth
//! and no update or delete path exists. Consumers assume records are
//! ordered by ascending, contiguous heights.

use serde::{Deserialize, Serialize};

/// Metadata for a single block as reported by the node
///
/// Serializes directly to the block store's CSV row layout
/// (`height,difficulty,time,mediantime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Block height (uniqueness key, ascending)
    pub height: u64,

    /// Difficulty relative to the maximum target
    pub difficulty: f64,

    /// Block timestamp in unix seconds
    pub time: i64,

    /// Median timestamp of recent blocks in unix seconds
    ///
    /// More manipulation-resistant than the raw block time.
    pub mediantime: i64,
}

impl BlockRecord {
    /// Render the block timestamp as a human-readable date-time string
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    pub fn time_string(&self) -> Option<String> {
        chrono::DateTime::from_timestamp(self.time, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}
