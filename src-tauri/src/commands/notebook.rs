//! Notebook commands
//!
//! View composition and the author-gated editing operations. Every
//! mutation emits a `note-updated` event tagged with the date key so
//! the frontend can drop events for dates it has navigated away from.

use crate::app::AppState;
use crate::database::DailyNote;
use crate::error::Result;
use crate::layout::{Category, ViewMode};
use crate::services::notebook::parse_date_key;
use crate::services::Role;
use tauri::{AppHandle, Emitter, State};

/// Load the role-appropriate view of one day.
#[tauri::command]
pub async fn load_view(state: State<'_, AppState>, date: String) -> Result<ViewMode> {
    let day = parse_date_key(&date)?;
    let note = state.notebook.load_day(&date).await?;
    let stamps = state.stamps.list(&date).await?;

    let view = match state.roles.role().await? {
        Role::Author => ViewMode::author(day, note.columns, stamps),
        Role::Viewer | Role::Anonymous => {
            let has_stamped = state.stamps.has_stamped(&date).await?;
            ViewMode::viewer(day, &note.columns, stamps, has_stamped)
        }
    };

    Ok(view)
}

/// Replace one record's text
#[tauri::command]
pub async fn set_text(
    app: AppHandle,
    state: State<'_, AppState>,
    date: String,
    id: i64,
    text: String,
) -> Result<DailyNote> {
    let author = state.roles.require_author().await?;
    let note = state.notebook.set_text(&date, id, &text, &author.email).await?;

    emit_note_updated(&app, &date);
    Ok(note)
}

/// Replace one record's category
#[tauri::command]
pub async fn set_category(
    app: AppHandle,
    state: State<'_, AppState>,
    date: String,
    id: i64,
    category: Category,
) -> Result<DailyNote> {
    let author = state.roles.require_author().await?;
    let note = state
        .notebook
        .set_category(&date, id, category, &author.email)
        .await?;

    emit_note_updated(&app, &date);
    Ok(note)
}

/// Swap a record with its neighbor
#[tauri::command]
pub async fn move_record(
    app: AppHandle,
    state: State<'_, AppState>,
    date: String,
    index: usize,
    direction: i32,
) -> Result<DailyNote> {
    let author = state.roles.require_author().await?;
    let note = state
        .notebook
        .move_record(&date, index, direction, &author.email)
        .await?;

    emit_note_updated(&app, &date);
    Ok(note)
}

/// Copy the previous day's record list onto this date
#[tauri::command]
pub async fn copy_previous_day(
    app: AppHandle,
    state: State<'_, AppState>,
    date: String,
) -> Result<DailyNote> {
    let author = state.roles.require_author().await?;
    let note = state
        .notebook
        .copy_from_previous_day(&date, &author.email)
        .await?;

    emit_note_updated(&app, &date);
    Ok(note)
}

fn emit_note_updated(app: &AppHandle, date: &str) {
    if let Err(e) = app.emit("note-updated", date) {
        tracing::warn!("Failed to emit note-updated event: {}", e);
    }
}
