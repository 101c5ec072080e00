mod app;
mod state;
mod ui;

use anyhow::{Context, Result, anyhow};
use eframe::egui;

use app::JobscopeApp;
use jobscope::config::DashboardConfig;
use jobscope::data::loader::load_file;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // No recovery path without data: fail before opening a window.
    let dataset = load_file(&config.data_path).with_context(|| {
        format!(
            "cannot start dashboard: failed to load {} (run fetch_jobs and clean_jobs first)",
            config.data_path.display()
        )
    })?;
    log::info!(
        "Loaded {} job records from {}",
        dataset.len(),
        config.data_path.display()
    );

    let state = AppState::new(dataset, config.data_path.clone(), config.view);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Job Market Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(JobscopeApp::new(state)))),
    )
    .map_err(|e| anyhow!("dashboard exited with an error: {e}"))
}
