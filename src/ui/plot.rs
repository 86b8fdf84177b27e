use eframe::egui::{self, Ui};
use egui_plot::{Corner, Legend, Plot, PlotPoints, Points};

use crate::chart::{ChartSpec, CHART_TITLE, POINT_OPACITY};
use crate::color::CategoryColors;

// ---------------------------------------------------------------------------
// Orbit camera – 3-D embedding coordinates → 2-D plot coordinates
// ---------------------------------------------------------------------------

/// Yaw/pitch orbit camera. Points are rotated around the Y axis (yaw) then
/// the X axis (pitch) and drawn orthographically; zoom and pan are left to
/// the plot widget itself.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            yaw: 0.7,
            pitch: 0.35,
        }
    }
}

impl Camera {
    const DRAG_SENSITIVITY: f32 = 0.01;

    /// Rotate by a pointer drag delta. Pitch is clamped short of the poles
    /// so the view never flips.
    pub fn orbit(&mut self, delta: egui::Vec2) {
        self.yaw += delta.x * Self::DRAG_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * Self::DRAG_SENSITIVITY).clamp(-1.5, 1.5);
    }

    /// Project one embedding point onto the plot plane.
    pub fn project(&self, p: [f64; 3]) -> [f64; 2] {
        let (sin_y, cos_y) = (self.yaw as f64).sin_cos();
        let (sin_x, cos_x) = (self.pitch as f64).sin_cos();

        // Rotate around Y axis (yaw)
        let x1 = p[0] * cos_y + p[2] * sin_y;
        let z1 = -p[0] * sin_y + p[2] * cos_y;

        // Rotate around X axis (pitch)
        let y1 = p[1] * cos_x - z1 * sin_x;

        [x1, y1]
    }
}

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the committed chart: one marker per point, colored by profit
/// category, hover text on the nearest point, drag to rotate the camera.
pub fn scatter_plot(ui: &mut Ui, chart: &ChartSpec, camera: &mut Camera) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(CHART_TITLE);
        if chart.is_empty() {
            ui.label("No listings match the selected features.");
        } else {
            ui.small("drag to rotate · scroll to zoom");
        }
    });

    let colors = CategoryColors::new(&chart.categories);
    let projected: Vec<[f64; 2]> = chart
        .points
        .iter()
        .map(|p| camera.project(p.position))
        .collect();

    let mut hovered: Option<usize> = None;

    let response = Plot::new("listing_space")
        .legend(Legend::default().position(Corner::LeftBottom))
        .data_aspect(1.0)
        .show_axes(false)
        .allow_drag(false)
        .allow_zoom(true)
        .allow_scroll(true)
        .show(ui, |plot_ui| {
            for category in &chart.categories {
                let series: PlotPoints = chart
                    .points
                    .iter()
                    .zip(&projected)
                    .filter(|(p, _)| &p.category == category)
                    .map(|(_, xy)| *xy)
                    .collect();

                let markers = Points::new(series)
                    .name(category)
                    .color(colors.color_for(category).gamma_multiply(POINT_OPACITY))
                    .radius(3.0);

                plot_ui.points(markers);
            }

            if let Some(pointer) = plot_ui.pointer_coordinate() {
                let bounds = plot_ui.plot_bounds();
                let threshold = bounds.width().max(bounds.height()) * 0.02;
                hovered = nearest_point(&projected, [pointer.x, pointer.y], threshold);
            }
        });

    if let Some(idx) = hovered {
        egui::show_tooltip_at_pointer(
            &response.response.ctx,
            response.response.layer_id,
            egui::Id::new("listing_hover"),
            |ui: &mut Ui| {
                ui.label(chart.points[idx].hover_text());
            },
        );
    }

    if response.response.dragged() {
        camera.orbit(response.response.drag_delta());
    }
}

/// Index of the projected point closest to the pointer, if any lies within
/// the pick threshold (plot units).
fn nearest_point(projected: &[[f64; 2]], pointer: [f64; 2], threshold: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, xy) in projected.iter().enumerate() {
        let d2 = (xy[0] - pointer[0]).powi(2) + (xy[1] - pointer[1]).powi(2);
        if d2 <= threshold * threshold && best.map_or(true, |(_, bd2)| d2 < bd2) {
            best = Some((i, d2));
        }
    }
    best.map(|(i, _)| i)
}
