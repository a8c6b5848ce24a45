mod dashboard;
mod data;
mod models;

use std::path::PathBuf;

use anyhow::Context;
use dashboard::commands::{get_chart_specs, get_dashboard, get_departments, reload_data};
use dashboard::DashboardStore;
use tauri::Manager;

pub(crate) struct AppState {
    pub(crate) dashboard: DashboardStore,
}

/// Bundled export, resolved relative to the app's resource directory.
const DATA_FILE: &str = "data/data.csv";
/// Development override for the export location.
const DATA_PATH_ENV: &str = "TATBOARD_DATA";

fn resolve_data_path(app: &tauri::App) -> PathBuf {
    if let Ok(path) = std::env::var(DATA_PATH_ENV) {
        return PathBuf::from(path);
    }

    app.path()
        .resource_dir()
        .map(|dir| dir.join(DATA_FILE))
        .unwrap_or_else(|_| PathBuf::from(DATA_FILE))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Tatboard starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let data_path = resolve_data_path(app);

                // Load-once: the record set is parsed here and only ever
                // re-read through the explicit reload command. A missing
                // export is an unrecoverable startup failure.
                let store = DashboardStore::load(data_path)
                    .context("failed to load the TAT export")?;

                app.manage(AppState { dashboard: store });
                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            get_departments,
            get_chart_specs,
            get_dashboard,
            reload_data,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
