pub mod auth;
pub mod booking;
pub mod chat;
pub mod i18n;
pub mod journal;
pub mod mood;
pub mod profile;
pub mod wellness;

use std::sync::Arc;

use serde::Serialize;
use tauri::State;

use crate::config;
use crate::core_state::CoreState;
use crate::i18n::Language;

/// Health check IPC command. Verifies the backend is running.
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// False when no backend URL/key is configured; account screens are disabled.
    pub backend_configured: bool,
    pub signed_in: bool,
    pub language: Language,
}

#[tauri::command]
pub fn get_app_info(state: State<'_, Arc<CoreState>>) -> AppInfo {
    AppInfo {
        name: config::APP_NAME,
        version: config::APP_VERSION,
        backend_configured: state.backend().is_ok(),
        signed_in: state.is_signed_in(),
        language: state.language(),
    }
}
