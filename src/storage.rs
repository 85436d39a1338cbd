//! Browser local storage behind the `KeyValueStore` seam.

use portal_core::{KeyValueStore, PortalError, PortalResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn storage_err(e: JsValue) -> PortalError {
    PortalError::Storage(format!("{:?}", e))
}

impl LocalStore {
    fn storage(&self) -> PortalResult<Storage> {
        web_sys::window()
            .ok_or_else(|| PortalError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(storage_err)?
            .ok_or_else(|| PortalError::Storage("local storage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        self.storage()?.get_item(key).map_err(storage_err)
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        self.storage()?.set_item(key, value).map_err(storage_err)
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        self.storage()?.remove_item(key).map_err(storage_err)
    }
}
