//! Browser Capability Wrappers
//!
//! Thin bindings to the browser services the checklist UI calls out to:
//! clipboard and theme persistence. They hold no checklist state.

mod clipboard;
mod theme;

use wasm_bindgen::{JsCast, JsValue};

// Re-export all public items
pub use clipboard::*;
pub use theme::*;

/// Best-effort message for a rejected promise or thrown JS value
fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}
