// Renrakucho - daily class contact notebook
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod commands;
mod config;
mod database;
mod error;
mod layout;
mod services;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "renrakucho=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting renrakucho application");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::sign_in,
            commands::sign_out,
            commands::current_principal,
            commands::current_role,
            commands::load_view,
            commands::set_text,
            commands::set_category,
            commands::move_record,
            commands::copy_previous_day,
            commands::submit_stamp,
            commands::list_stamps,
            commands::has_stamped,
            commands::export_notebook,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
