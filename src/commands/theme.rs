//! Theme Commands
//!
//! Reads and writes the theme preference in localStorage and applies it to
//! the document root.

use crate::theme::{Theme, DARK_CLASS, THEME_STORAGE_KEY};

use super::js_error_message;

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("No window")?
        .local_storage()
        .map_err(|e| js_error_message(&e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

fn document_root() -> Result<web_sys::Element, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| "No document element".to_string())
}

/// Stored preference, falling back to the class already on `<html>`
pub fn load_theme() -> Theme {
    match local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).map_err(|e| js_error_message(&e))) {
        Ok(Some(value)) => Theme::from_str(&value),
        Ok(None) => theme_from_document(),
        Err(err) => {
            log::warn!("[THEME] {}", err);
            theme_from_document()
        }
    }
}

fn theme_from_document() -> Theme {
    match document_root() {
        Ok(root) if root.class_list().contains(DARK_CLASS) => Theme::Dark,
        _ => Theme::Light,
    }
}

pub fn save_theme(theme: Theme) -> Result<(), String> {
    local_storage()?
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|e| js_error_message(&e))
}

/// Toggle the dark class on `<html>` to match `theme`
pub fn apply_theme(theme: Theme) -> Result<(), String> {
    document_root()?
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
        .map(|_| ())
        .map_err(|e| js_error_message(&e))
}
