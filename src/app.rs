use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::theme;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
    pub config: DashboardConfig,
}

impl PenguinDashApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, config: DashboardConfig) -> Self {
        theme::apply_visuals(&cc.egui_ctx);
        Self { state, config }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and row counts ----
        let view = self.state.view();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &view, &self.config);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.config);
            });

        // Filters may have moved; every output below reads this one view.
        let view = self.state.view();

        // ---- Central panel: value boxes, plot, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::value_boxes(ui, &view, &self.config);
            ui.add_space(8.0);
            ui.columns(2, |cols| {
                panels::card(&mut cols[0], "Bill length and depth", |ui| {
                    plot::scatter_plot(ui, &self.state, &view);
                });
                panels::card(&mut cols[1], "Penguin Data", |ui| {
                    table::data_grid(ui, &mut self.state, &view);
                });
            });
        });
    }
}
