//! Application state and initialization
//!
//! Manages the central application state and lifecycle. All services
//! are initialized here and made available through AppState.

use crate::config::{DEFAULT_AUTHOR_EMAIL, EXPORT_DIR_NAME, SETTING_AUTHOR_EMAIL};
use crate::database::{self, Repository};
use crate::error::Result;
use crate::services::{ExportService, NotebookService, RoleService, StampService};
use tauri::{App, Manager};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: std::path::PathBuf,
    pub notebook: NotebookService,
    pub stamps: StampService,
    pub roles: RoleService,
    pub export: ExportService,
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    let app_data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| crate::error::AppError::Generic(format!("Failed to get app data dir: {}", e)))?;

    tracing::info!("App data directory: {:?}", app_data_dir);

    std::fs::create_dir_all(&app_data_dir)?;
    std::fs::create_dir_all(app_data_dir.join(EXPORT_DIR_NAME))?;
    std::fs::create_dir_all(app_data_dir.join("fonts"))?;
    std::fs::create_dir_all(app_data_dir.join("logs"))?;

    let pool = tauri::async_runtime::block_on(database::create_pool(
        &app_data_dir.join("renrakucho.db"),
    ))?;
    let repo = Repository::new(pool);

    // Seed the author allow-list once; deployments rebind it through
    // the settings table.
    tauri::async_runtime::block_on(async {
        if repo.get_setting(SETTING_AUTHOR_EMAIL).await?.is_none() {
            repo.set_setting(SETTING_AUTHOR_EMAIL, DEFAULT_AUTHOR_EMAIL)
                .await?;
        }
        Ok::<(), crate::error::AppError>(())
    })?;

    let state = AppState {
        notebook: NotebookService::new(repo.clone()),
        stamps: StampService::new(repo.clone()),
        roles: RoleService::new(repo),
        export: ExportService::new(
            app_data_dir.join(EXPORT_DIR_NAME),
            app_data_dir.join("fonts"),
        ),
        app_data_dir,
    };
    app.manage(state);

    tracing::info!("Application initialized successfully");

    Ok(())
}
