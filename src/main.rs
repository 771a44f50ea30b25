mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use app::FitnessExplorerApp;
use clap::Parser;
use config::Config;
use data::source::LazyDataset;
use eframe::egui;
use log::{info, warn};
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let query = config.initial_query()?;

    // Read once up front; a failure is shown in the window rather than aborting.
    let source = LazyDataset::new(&config.data, config.unknown_gender());
    info!("Reading dataset from {}", source.path().display());
    let dataset = source.get().map(Arc::clone);
    if let Ok(ds) = &dataset {
        if ds.is_empty() {
            warn!("{} contains no records", source.path().display());
        }
    }
    let state = AppState::new(dataset, query, config.bins);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 850.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Health & Fitness Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(FitnessExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
