pub mod account;
pub mod backend; // Hosted backend: rows + auth
pub mod booking;
pub mod chat;
pub mod commands;
pub mod companion; // Keyword reply selector
pub mod config;
pub mod core_state;
pub mod error;
pub mod i18n; // en/hi string tables
pub mod journal;
pub mod models;
pub mod mood;
pub mod wellness;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("MannMitra starting v{}", config::APP_VERSION);

    let app_config = match config::AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Config could not be loaded, using defaults");
            config::AppConfig::default()
        }
    };
    tracing::debug!(
        backend = app_config.has_backend(),
        language = %app_config.default_language,
        typing_delay_ms = app_config.typing_delay_ms,
        "Configuration loaded"
    );

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(Arc::new(core_state::CoreState::new(app_config)))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::get_app_info,
            // Language
            commands::i18n::get_language,
            commands::i18n::set_language,
            commands::i18n::toggle_language,
            commands::i18n::translate,
            commands::i18n::get_translations,
            // Account
            commands::auth::sign_up,
            commands::auth::sign_in,
            commands::auth::sign_out,
            commands::auth::get_current_user,
            commands::profile::get_profile,
            commands::profile::get_dashboard,
            // Companion chat
            commands::chat::open_chat,
            commands::chat::send_chat_message,
            commands::chat::get_chat_messages,
            commands::chat::close_chat,
            // Mood check-in
            commands::mood::get_mood_options,
            commands::mood::record_mood,
            commands::mood::list_mood_entries,
            // Journal
            commands::journal::save_journal_entry,
            commands::journal::list_journal_entries,
            commands::journal::search_journal_entries,
            commands::journal::delete_journal_entry,
            // Counselor booking
            commands::booking::list_counselors,
            commands::booking::book_counselor,
            commands::booking::list_bookings,
            // Wellness hub
            commands::wellness::get_wellness_content,
            commands::wellness::get_welcome_quotes,
        ])
        .run(tauri::generate_context!())
        .expect("error while running MannMitra");
}
