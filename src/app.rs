use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FitnessExplorerApp {
    pub state: AppState,
}

impl FitnessExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for FitnessExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: tab menu ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: selected page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Home => panels::home_page(ui),
            Tab::Explore => plot::explore_page(ui, &mut self.state),
        });
    }
}
