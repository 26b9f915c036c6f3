//! Clipboard Adapter
//!
//! `navigator.clipboard.writeText`, awaited.

use thiserror::Error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
///
/// Fails when there is no window, the page lacks permission, or the API is
/// missing (insecure context).
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    if web_sys::window().is_none() {
        return Err(ClipboardError::Unavailable);
    }
    write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(e.as_string().unwrap_or_else(|| format!("{:?}", e))))
}
