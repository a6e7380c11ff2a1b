use serde::Serialize;

use crate::wellness::{self, CategoryContent, WelcomeQuote};

#[derive(Debug, Clone, Serialize)]
pub struct WellnessHubView {
    pub categories: Vec<CategoryContent>,
    pub featured_quote: &'static str,
}

/// Hub content, optionally filtered by a search term.
#[tauri::command]
pub fn get_wellness_content(search: Option<String>) -> WellnessHubView {
    WellnessHubView {
        categories: wellness::search(search.as_deref().unwrap_or("")),
        featured_quote: wellness::FEATURED_QUOTE,
    }
}

#[tauri::command]
pub fn get_welcome_quotes() -> Vec<WelcomeQuote> {
    wellness::WELCOME_QUOTES.to_vec()
}
