//! Pie presentation of the solve-time buckets
//!
//! egui_plot has no pie primitive, so slices are triangulated into an
//! egui mesh and drawn directly on the panel painter. Slice geometry is
//! computed separately from drawing so it can be tested headlessly.

use crate::analysis::Bucket;
use egui::{Align2, Color32, FontId, Mesh, Pos2, Shape, Ui};

/// A labelled pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Range label, e.g. `0~5 minutes` or `>15 minutes`
    pub label: String,
    /// Number of values in the slice
    pub count: usize,
    /// Share of the total, in `0.0..=1.0`
    pub fraction: f64,
}

/// Convert histogram buckets into pie slices
///
/// Empty buckets are skipped, matching the bar presentation. Returns an
/// empty vector when all buckets are empty.
pub fn pie_slices(buckets: &[Bucket]) -> Vec<PieSlice> {
    let total: usize = buckets.iter().map(|b| b.count).sum();
    if total == 0 {
        return Vec::new();
    }

    buckets
        .iter()
        .filter(|bucket| bucket.count > 0)
        .map(|bucket| {
            let label = match bucket.upper {
                Some(upper) => format!("{:.0}~{:.0} minutes", bucket.lower, upper),
                None => format!(">{:.0} minutes", bucket.lower),
            };
            PieSlice {
                label,
                count: bucket.count,
                fraction: bucket.count as f64 / total as f64,
            }
        })
        .collect()
}

/// Draw the pie and its labels into the available panel area
pub fn draw_pie(ui: &mut Ui, slices: &[PieSlice]) {
    let rect = ui.available_rect_before_wrap();
    let radius = rect.width().min(rect.height()) * 0.35;
    let center = rect.center();
    let painter = ui.painter();

    let mut angle = -std::f32::consts::FRAC_PI_2;
    for (index, slice) in slices.iter().enumerate() {
        let sweep = slice.fraction as f32 * std::f32::consts::TAU;
        painter.add(slice_shape(center, radius, angle, sweep, slice_color(index)));

        let mid = angle + sweep / 2.0;
        let label_pos = center + radius * 1.25 * egui::vec2(mid.cos(), mid.sin());
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            format!("{} ({:.1} %)", slice.label, slice.fraction * 100.0),
            FontId::proportional(14.0),
            ui.visuals().text_color(),
        );

        angle += sweep;
    }
}

/// Triangulate one slice into a fan mesh
///
/// A mesh is used instead of a convex polygon because slices covering
/// more than half the pie are not convex.
fn slice_shape(center: Pos2, radius: f32, start: f32, sweep: f32, color: Color32) -> Shape {
    let steps = ((sweep / 0.02).ceil() as u32).max(2);

    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for step in 0..=steps {
        let a = start + sweep * step as f32 / steps as f32;
        mesh.colored_vertex(center + radius * egui::vec2(a.cos(), a.sin()), color);
    }
    for step in 0..steps {
        mesh.add_triangle(0, step + 1, step + 2);
    }

    Shape::mesh(mesh)
}

/// Color for the slice at the given index
pub fn slice_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 6] = [
        Color32::from_rgb(0x4e, 0x79, 0xa7),
        Color32::from_rgb(0xf2, 0x8e, 0x2b),
        Color32::from_rgb(0xe1, 0x57, 0x59),
        Color32::from_rgb(0x76, 0xb7, 0xb2),
        Color32::from_rgb(0x59, 0xa1, 0x4f),
        Color32::from_rgb(0xed, 0xc9, 0x48),
    ];
    PALETTE[index % PALETTE.len()]
}
