//! Row-oriented block store
//!
//! Fetched records are persisted to a flat CSV file with the header
//! `height,difficulty,time,mediantime` and one row per block, ordered by
//! ascending height. Reading the file back reproduces the same records
//! in the same order with types reconstructed.
//!
//! There is no schema versioning and no partial-row recovery: a
//! malformed row aborts the read.

use crate::error::{Result, ResultExt};
use crate::types::BlockRecord;
use std::path::Path;

/// Write records to a CSV file, replacing any existing contents
pub fn write_records(path: &Path, records: &[BlockRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(Into::into)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!(rows = records.len(), path = %path.display(), "block store written");
    Ok(())
}

/// Read all records back from a CSV file in file order
pub fn read_records(path: &Path) -> Result<Vec<BlockRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(Into::into)
        .with_context(|| format!("Failed to open {} for reading", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    tracing::debug!(rows = records.len(), path = %path.display(), "block store read");
    Ok(records)
}
