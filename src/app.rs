use std::path::PathBuf;

use eframe::egui;

use crate::data::loader::DEFAULT_DATA_PATH;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState,
    camera: plot::Camera,
}

impl ExplorerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Fixed dark theme.
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            state: AppState::new(PathBuf::from(DEFAULT_DATA_PATH)),
            camera: plot::Camera::default(),
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: brand bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: tabs and filters ----
        egui::SidePanel::left("control_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: 3-D scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state.chart, &mut self.camera);
        });
    }
}
