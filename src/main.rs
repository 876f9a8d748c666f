mod app;
mod color;
mod config;
mod currency;
mod data;
mod state;
mod ui;

use app::FareLensApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match DashboardConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, using defaults: {e:#}");
            DashboardConfig::default()
        }
    };
    log::info!("Dashboard starting with {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fare Lens – Flight Price Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(FareLensApp::new(config)))),
    )
}
