//! PumpTracker - Workout Log
//!
//! Main entry point for the application.

use anyhow::Context;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pumptracker::storage::config::{self, AppConfig};
use pumptracker::storage::Database;
use pumptracker::workouts::{SystemClock, WorkoutStore};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PumpTracker v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not read config, using defaults");
        AppConfig {
            data_dir: config::get_data_dir(),
            ..Default::default()
        }
    });

    let db = open_database(&config)?;
    let store = WorkoutStore::open(db, SystemClock, config.storage.log_key.clone())
        .context("Failed to load workouts")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_min_inner_size([560.0, 600.0])
            .with_title("PUMP TRACKER - Get Hyped!"),
        ..Default::default()
    };

    eframe::run_native(
        "PumpTracker",
        options,
        Box::new(move |cc| Ok(Box::new(app::PumpTrackerApp::new(cc, config, store)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}

/// Open the on-disk database, falling back to memory so the session still works.
fn open_database(config: &AppConfig) -> anyhow::Result<Database> {
    let path = config.database_path();

    match Database::open(&path) {
        Ok(db) => {
            tracing::info!(path = %path.display(), "Using workout database");
            Ok(db)
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %path.display(),
                "Could not open workout database, workouts will not be saved"
            );
            Database::open_in_memory().context("Failed to open in-memory database")
        }
    }
}
