//! Language selection and string lookup.

use std::collections::HashMap;
use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::i18n::{self, Language};

#[tauri::command]
pub fn get_language(state: State<'_, Arc<CoreState>>) -> Language {
    state.language()
}

/// Accepts `"en"` or `"hi"`.
#[tauri::command]
pub fn set_language(language: String, state: State<'_, Arc<CoreState>>) -> Result<Language, String> {
    let language: Language = language.parse().map_err(|e: i18n::UnknownLanguage| e.to_string())?;
    state.set_language(language).map_err(|e| e.to_string())?;
    Ok(language)
}

#[tauri::command]
pub fn toggle_language(state: State<'_, Arc<CoreState>>) -> Result<Language, String> {
    state.toggle_language().map_err(|e| e.to_string())
}

/// Resolve one key in the active language. Unknown keys come back unchanged.
#[tauri::command]
pub fn translate(key: String, state: State<'_, Arc<CoreState>>) -> String {
    i18n::resolve(state.language(), &key).to_string()
}

/// Whole table for `language`, or for the active language when omitted.
#[tauri::command]
pub fn get_translations(
    language: Option<String>,
    state: State<'_, Arc<CoreState>>,
) -> Result<HashMap<&'static str, &'static str>, String> {
    let language = match language {
        Some(tag) => tag.parse().map_err(|e: i18n::UnknownLanguage| e.to_string())?,
        None => state.language(),
    };
    Ok(i18n::table(language).clone())
}
