//! Acknowledgement stamp commands
//!
//! Open to every caller, signed in or not. Mutations emit a
//! `stamps-updated` event tagged with the date key.

use crate::app::AppState;
use crate::database::Acknowledgement;
use crate::error::Result;
use tauri::{AppHandle, Emitter, State};

/// Append a named stamp to a date's log
#[tauri::command]
pub async fn submit_stamp(
    app: AppHandle,
    state: State<'_, AppState>,
    date: String,
    name: String,
) -> Result<Acknowledgement> {
    let record = state.stamps.submit(&date, &name).await?;

    if let Err(e) = app.emit("stamps-updated", &date) {
        tracing::warn!("Failed to emit stamps-updated event: {}", e);
    }

    Ok(record)
}

/// List a date's stamps in append order
#[tauri::command]
pub async fn list_stamps(state: State<'_, AppState>, date: String) -> Result<Vec<Acknowledgement>> {
    state.stamps.list(&date).await
}

/// Whether this device's remembered name already stamped the date
#[tauri::command]
pub async fn has_stamped(state: State<'_, AppState>, date: String) -> Result<bool> {
    state.stamps.has_stamped(&date).await
}
