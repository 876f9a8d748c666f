use eframe::egui::{self, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::state::{AppState, Tab};
use crate::ui::{charts, panels, summary, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FareLensApp {
    pub state: AppState,
}

impl FareLensApp {
    /// Create the app and load the configured data file once.
    pub fn new(config: DashboardConfig) -> Self {
        let path = config.data_path.clone();
        let mut state = AppState::new(config);
        panels::load_into(&mut state, &path);
        Self { state }
    }
}

impl eframe::App for FareLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: stats, insights, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel(ui, &self.state);
        });
    }
}

fn central_panel(ui: &mut Ui, state: &AppState) {
    if state.loading {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Loading flight data…  (File → Open… to pick a CSV)");
        });
        return;
    }

    let view = state.visible_records();
    match state.tab {
        Tab::Overview => {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    summary::stat_cards(ui, state);
                    ui.add_space(8.0);
                    summary::insights(ui, state);
                    ui.separator();
                    charts::chart_grid(ui, state, &view);
                });
        }
        Tab::Flights => table::flights_table(ui, &view),
    }
}
