//! Clipboard Commands
//!
//! Frontend wrapper for writing exported checklists to the clipboard.

use wasm_bindgen::prelude::*;

use super::js_error_message;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Write text to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {}", js_error_message(&e)))
}
