mod app;
mod color;
mod config;
mod data;
mod state;
mod theme;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use app::PenguinDashApp;
use config::DashboardConfig;
use data::model::PenguinDataset;
use eframe::egui;
use state::AppState;

fn load_dataset(config: &DashboardConfig) -> Result<PenguinDataset> {
    match &config.data_path {
        Some(path) => data::loader::load_csv_file(path),
        None => data::loader::load_bundled(),
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();

    // Without data there is nothing to show.
    let dataset = match load_dataset(&config) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load penguins table: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} penguins, lightest {:?} g",
        dataset.len(),
        dataset.min_body_mass()
    );

    let state = AppState::new(Arc::new(dataset), &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(PenguinDashApp::new(cc, state, config)))),
    )
}
