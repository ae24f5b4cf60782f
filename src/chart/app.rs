//! The chart window application
//!
//! One [`ChartApp`] renders exactly one chart over the records it was
//! created with. The data is immutable for the lifetime of the window,
//! so all series are derived once at construction.

use crate::analysis::{
    bucket_by_range, density_histogram, solve_times, Bucket, DensityBin, SolveTime,
};
use crate::chart::pie::{draw_pie, pie_slices};
use crate::chart::{
    compare, ChartKind, DENSITY_BIN_COUNT, SOLVE_TIME_BUCKET_COUNT, SOLVE_TIME_BUCKET_MINUTES,
};
use crate::types::BlockRecord;
use egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Corner, Legend, Line, Plot, PlotPoints};

/// eframe application rendering a single chart
pub struct ChartApp {
    kind: ChartKind,
    records: Vec<BlockRecord>,
    solve_times: Vec<SolveTime>,
}

impl ChartApp {
    /// Create the app and derive the solve-time series once
    pub fn new(kind: ChartKind, records: Vec<BlockRecord>) -> Self {
        let solve_times = solve_times(&records);
        Self {
            kind,
            records,
            solve_times,
        }
    }

    fn solve_minutes(&self) -> Vec<f64> {
        self.solve_times.iter().map(|s| s.minutes).collect()
    }

    fn solve_time_buckets(&self) -> Vec<Bucket> {
        bucket_by_range(
            &self.solve_minutes(),
            SOLVE_TIME_BUCKET_MINUTES,
            SOLVE_TIME_BUCKET_COUNT,
        )
    }

    fn render_solve_time(&self, ui: &mut Ui) {
        let half = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;

        let points: Vec<[f64; 2]> = self
            .solve_times
            .iter()
            .map(|s| [s.height as f64, s.minutes])
            .collect();

        Plot::new("solve_time_line")
            .height(half)
            .x_axis_label("height")
            .y_axis_label("solve time / minutes")
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                let line = Line::new("solve time", PlotPoints::from(points))
                    .color(Color32::from_rgb(0x4e, 0x79, 0xa7))
                    .width(1.5);
                plot_ui.line(line);
            });

        let bars: Vec<Bar> = self
            .solve_time_buckets()
            .iter()
            .filter(|bucket| bucket.count > 0)
            .map(|bucket| {
                Bar::new(
                    bucket.lower + SOLVE_TIME_BUCKET_MINUTES / 2.0,
                    bucket.count as f64,
                )
                .width(SOLVE_TIME_BUCKET_MINUTES / 2.0)
            })
            .collect();

        Plot::new("solve_time_bars")
            .height(half)
            .x_axis_label("solve time")
            .y_axis_label("blocks")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new("blocks", bars).color(Color32::from_rgb(0xf2, 0x8e, 0x2b)),
                );
            });
    }

    fn render_difficulty(&self, ui: &mut Ui) {
        // The first record has no solve time; skip it here too so the
        // difficulty and solve-time charts cover the same heights.
        let points: Vec<[f64; 2]> = self
            .records
            .iter()
            .skip(1)
            .map(|r| [r.height as f64, r.difficulty])
            .collect();

        Plot::new("difficulty_trend")
            .x_axis_label("height")
            .y_axis_label("difficulty")
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                let line = Line::new("difficulty changes", PlotPoints::from(points))
                    .color(Color32::from_rgb(0x4e, 0x79, 0xa7))
                    .width(1.5);
                plot_ui.line(line);
            });
    }

    fn render_pie(&self, ui: &mut Ui) {
        let slices = pie_slices(&self.solve_time_buckets());
        draw_pie(ui, &slices);
    }

    fn render_histogram(&self, ui: &mut Ui) {
        let bins: Vec<DensityBin> = density_histogram(&self.solve_minutes(), DENSITY_BIN_COUNT);
        let bars: Vec<Bar> = bins
            .iter()
            .map(|bin| Bar::new(bin.center, bin.density).width(bin.width))
            .collect();

        Plot::new("solve_time_density")
            .x_axis_label("solve time / minutes")
            .y_axis_label("density")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new("density", bars).color(Color32::from_rgb(0x76, 0xb7, 0xb2)),
                );
            });
    }

    fn render_algo_compare(&self, ui: &mut Ui) {
        Plot::new("algo_compare")
            .x_axis_label("height")
            .y_axis_label("difficulty")
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(
                        "legacy difficulty",
                        PlotPoints::from(compare::legacy_series()),
                    )
                    .color(Color32::from_rgb(0x4e, 0x79, 0xa7))
                    .width(1.5),
                );
                plot_ui.line(
                    Line::new("lwma difficulty", PlotPoints::from(compare::lwma_series()))
                        .color(Color32::from_rgb(0xe1, 0x57, 0x59))
                        .width(1.5),
                );
            });
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.kind {
            ChartKind::SolveTime => self.render_solve_time(ui),
            ChartKind::Difficulty => self.render_difficulty(ui),
            ChartKind::SolveTimePie => self.render_pie(ui),
            ChartKind::Histogram => self.render_histogram(ui),
            ChartKind::AlgoCompare => self.render_algo_compare(ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(height: u64, difficulty: f64, time: i64) -> BlockRecord {
        BlockRecord {
            height,
            difficulty,
            time,
            mediantime: time,
        }
    }

    #[test]
    fn test_app_derives_solve_times_on_construction() {
        let records = vec![
            record(100, 1.0, 1000),
            record(101, 1.0, 1400),
            record(102, 1.0, 1900),
        ];
        let app = ChartApp::new(ChartKind::SolveTime, records);

        assert_eq!(app.solve_times.len(), 2);
        let minutes = app.solve_minutes();
        assert!((minutes[0] - 400.0 / 60.0).abs() < 1e-12);
        assert!((minutes[1] - 500.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_bucket_counts_match_solve_times() {
        let records = vec![
            record(100, 1.0, 0),
            record(101, 1.0, 120),   // 2 minutes
            record(102, 1.0, 540),   // 7 minutes
            record(103, 1.0, 1740),  // 20 minutes
        ];
        let app = ChartApp::new(ChartKind::SolveTimePie, records);

        let buckets = app.solve_time_buckets();
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, app.solve_times.len());
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets.last().unwrap().count, 1);
    }
}
