//! localStorage Adapter

use supertask_core::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// `window.localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: describe(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: describe(&e),
        })
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
