//! Export commands

use crate::app::AppState;
use crate::error::Result;
use crate::layout::compose_notebook;
use crate::services::notebook::parse_date_key;
use tauri::State;

/// Render a date's notebook page to `notebook-{date}.pdf` and return
/// the written path. Author-gated like the rest of the edit surface.
#[tauri::command]
pub async fn export_notebook(state: State<'_, AppState>, date: String) -> Result<String> {
    state.roles.require_author().await?;

    let day = parse_date_key(&date)?;
    let note = state.notebook.load_day(&date).await?;
    let page = compose_notebook(day, &note.columns);

    let path = state.export.export_pdf(&page).await?;
    Ok(path.to_string_lossy().to_string())
}
