//! Chart rendering using eframe/egui and egui_plot
//!
//! Each invocation opens one native window showing a single chart over
//! the loaded block records. The charts are independent of each other
//! and mutually exclusive at run time.
//!
//! # Charts
//!
//! - [`ChartKind::SolveTime`] - solve time per block plus a bucketed bar
//!   histogram of the same values
//! - [`ChartKind::Difficulty`] - difficulty trend over height
//! - [`ChartKind::SolveTimePie`] - pie presentation of the solve-time
//!   buckets
//! - [`ChartKind::Histogram`] - 50-bin density histogram of solve times
//! - [`ChartKind::AlgoCompare`] - legacy vs LWMA difficulty curves
//!   recomputed from a bundled sample of compact target encodings

mod app;
mod compare;
mod pie;

pub use app::ChartApp;
pub use compare::{lwma_series, legacy_series, SAMPLE_HEIGHTS};
pub use pie::{pie_slices, PieSlice};

use crate::error::{BlockStatsError, Result};
use crate::types::BlockRecord;

/// Bucket width in minutes shared by the bar and pie presentations
pub const SOLVE_TIME_BUCKET_MINUTES: f64 = 5.0;

/// Number of fixed-width solve-time buckets before the overflow bucket
pub const SOLVE_TIME_BUCKET_COUNT: usize = 3;

/// Number of bins in the density histogram
pub const DENSITY_BIN_COUNT: usize = 50;

/// The chart to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    /// Solve time per block with a bucketed histogram
    SolveTime,
    /// Difficulty trend over height
    Difficulty,
    /// Solve-time buckets as a pie
    SolveTimePie,
    /// Density histogram of solve times
    Histogram,
    /// Difficulty-algorithm comparison from bundled sample data
    AlgoCompare,
}

impl ChartKind {
    /// Window title for this chart
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::SolveTime => "Solve Time",
            ChartKind::Difficulty => "Difficulty Trend",
            ChartKind::SolveTimePie => "Solve Time Distribution",
            ChartKind::Histogram => "Solve Time Histogram",
            ChartKind::AlgoCompare => "Difficulty Algorithm Comparison",
        }
    }

    /// Whether the chart is derived from stored block records
    ///
    /// The algorithm comparison renders bundled sample data and needs no
    /// block store.
    pub fn requires_records(&self) -> bool {
        !matches!(self, ChartKind::AlgoCompare)
    }
}

/// Open a native window rendering the chosen chart
///
/// Blocks until the operator closes the window.
pub fn show_chart(kind: ChartKind, records: Vec<BlockRecord>) -> Result<()> {
    if kind.requires_records() && records.len() < 2 {
        return Err(BlockStatsError::Dataset(format!(
            "at least 2 block records are required for the {} chart, got {}",
            kind.title(),
            records.len()
        )));
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title(kind.title()),
        ..Default::default()
    };

    eframe::run_native(
        "Block Statistics",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(kind, records)))),
    )
    .map_err(|e| BlockStatsError::Window(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_titles() {
        assert_eq!(ChartKind::SolveTime.title(), "Solve Time");
        assert_eq!(
            ChartKind::AlgoCompare.title(),
            "Difficulty Algorithm Comparison"
        );
    }

    #[test]
    fn test_record_requirements() {
        assert!(ChartKind::SolveTime.requires_records());
        assert!(ChartKind::Difficulty.requires_records());
        assert!(ChartKind::SolveTimePie.requires_records());
        assert!(ChartKind::Histogram.requires_records());
        assert!(!ChartKind::AlgoCompare.requires_records());
    }
}
