//! Tauri commands exposed to the frontend
//!
//! Commands are organized into logical submodules:
//! - `auth`: sign-in/sign-out and role lookup
//! - `notebook`: day loading, view composition, and authoring
//! - `stamps`: acknowledgement stamping
//! - `export`: PDF export

pub mod auth;
pub mod export;
pub mod notebook;
pub mod stamps;

use crate::app::AppState;
use crate::error::Result;
use tauri::State;

// Re-export all commands for convenient registration in main.rs
pub use auth::*;
pub use export::*;
pub use notebook::*;
pub use stamps::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub async fn get_app_info(state: State<'_, AppState>) -> Result<AppInfo> {
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app_data_dir: state.app_data_dir.to_string_lossy().to_string(),
    })
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub version: String,
    pub app_data_dir: String,
}
