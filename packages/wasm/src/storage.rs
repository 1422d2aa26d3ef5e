//! `localStorage`-backed state store.

use sitebuilder_editor::{StateStore, StorageKey, StoreError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Any object with the Web Storage `getItem`/`setItem`/`removeItem`
    /// methods (`window.localStorage` in the browser).
    pub type JsStorage;

    #[wasm_bindgen(method, catch, js_name = getItem)]
    fn get_item(this: &JsStorage, key: &str) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setItem)]
    fn set_item(this: &JsStorage, key: &str, value: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeItem)]
    fn remove_item(this: &JsStorage, key: &str) -> Result<(), JsValue>;
}

fn backend_error(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

pub struct LocalStorageStore {
    storage: JsStorage,
}

impl LocalStorageStore {
    pub fn new(storage: JsStorage) -> Self {
        Self { storage }
    }
}

impl StateStore for LocalStorageStore {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key.as_str()).map_err(backend_error)
    }

    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StoreError> {
        // Quota errors surface here.
        self.storage.set_item(key.as_str(), value).map_err(backend_error)
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StoreError> {
        self.storage.remove_item(key.as_str()).map_err(backend_error)
    }
}
