//! Key-Value Storage
//!
//! Abstract interface over the browser's localStorage so the timer store and
//! the theme can be exercised against an in-memory backend.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use wasm_bindgen::JsValue;

use crate::error::{StoreError, StoreResult};

/// String key-value storage with synchronous writes
pub trait KeyValueStore {
    /// Read a value; unreadable entries are reported as absent
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite a value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a value (absent keys are not an error)
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// `window.localStorage`
#[derive(Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the current window's local storage
    pub fn local() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Storage("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// In-memory storage, used when localStorage is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    /// Make subsequent writes fail, as a full or blocked localStorage would
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.get() {
            Err(StoreError::Storage("quota exceeded".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check_writable()?;
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
