//! Statistical analysis of block metadata
//!
//! Provides the numeric transforms behind the charts:
//! - Difficulty recomputation from the compact target encoding
//! - Solve-time derivation from adjacent block timestamps
//! - Fixed-width and density histogram bucketing

pub mod difficulty;
pub mod histogram;

pub use difficulty::{difficulty_from_bits, MAX_TARGET_BITS};
pub use histogram::{bucket_by_range, density_histogram, Bucket, DensityBin};

use crate::types::BlockRecord;

/// Solve time of a single block in minutes, keyed by its height
#[derive(Debug, Clone, PartialEq)]
pub struct SolveTime {
    /// Height of the later block of the pair
    pub height: u64,
    /// Elapsed minutes since the previous block
    pub minutes: f64,
}

/// Derive per-block solve times from a height-ordered record list
///
/// Each entry is `(time[i] - time[i-1]) / 60` minutes; the first block
/// has no predecessor and produces no entry.
pub fn solve_times(records: &[BlockRecord]) -> Vec<SolveTime> {
    records
        .windows(2)
        .map(|pair| SolveTime {
            height: pair[1].height,
            minutes: (pair[1].time - pair[0].time) as f64 / 60.0,
        })
        .collect()
}

/// Arithmetic mean of a value list, `None` for empty input
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
