mod app;
mod config;
mod data;
mod state;
mod ui;

use app::LumenFinderApp;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::parse();
    log::info!("Starting Lumen Finder: {}", config.summary());

    // The catalog is read exactly once, before the window opens.
    let state = AppState::load(&config.data_file).with_top_k(config.top_k);
    log::info!("{}", state.load_status);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lumen Finder – Lighting Catalog Filter",
        options,
        Box::new(move |_cc| Ok(Box::new(LumenFinderApp::new(state)))),
    )
}
