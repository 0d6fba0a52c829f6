//! Authentication commands
//!
//! The shell's identity provider reports the signed-in principal;
//! these commands record it and expose the derived role.

use crate::app::AppState;
use crate::error::Result;
use crate::services::{Principal, Role};
use tauri::State;

/// Record the principal the identity provider authenticated.
#[tauri::command]
pub async fn sign_in(state: State<'_, AppState>, email: String) -> Result<Role> {
    state.roles.sign_in(email).await
}

/// Clear the session principal.
#[tauri::command]
pub async fn sign_out(state: State<'_, AppState>) -> Result<()> {
    state.roles.sign_out().await;
    Ok(())
}

/// The current principal, if signed in.
#[tauri::command]
pub async fn current_principal(state: State<'_, AppState>) -> Result<Option<Principal>> {
    Ok(state.roles.current_principal().await)
}

/// Role of the current caller.
#[tauri::command]
pub async fn current_role(state: State<'_, AppState>) -> Result<Role> {
    state.roles.role().await
}
