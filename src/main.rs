mod app;
mod color;
mod data;
mod forecast;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::RateScopeApp;
use eframe::egui;
use state::AppState;

/// Inputs are fixed paths, as in the hosted dashboard: no flags, no
/// environment variables.
const DATASET_PATH: &str = "data/mortality_rates.csv";
const MODEL_PATH: &str = "data/forecast_model.json";

/// One-shot startup load: dataset, model artifact, forecast sequence.
/// Everything downstream borrows the result; nothing is reloaded per
/// interaction.
fn load_startup_state() -> Result<AppState> {
    let dataset =
        data::loader::load_csv(Path::new(DATASET_PATH)).context("loading observation dataset")?;
    let artifact = forecast::artifact::load_artifact(Path::new(MODEL_PATH))
        .context("loading forecast model artifact")?;
    let sequence = forecast::provider::forecast_sequence(&artifact, forecast::provider::HORIZON);
    Ok(AppState::new(dataset, sequence))
}

fn main() -> eframe::Result {
    env_logger::init();

    let state = match load_startup_state() {
        Ok(state) => state,
        Err(e) => {
            log::error!("startup failed: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RateScope – Suicide Rate Forecast Dashboard",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the banner png.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let app = RateScopeApp::new(state);
            app.state.theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
