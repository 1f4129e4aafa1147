//! Browser `localStorage` helpers for the persisted auth token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the auth binding persists anything; these helpers keep the web-sys
//! glue in one place and no-op outside the browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
type Store = web_sys::Storage;

/// Off-browser stand-in: reads nothing and discards writes.
#[cfg(not(feature = "hydrate"))]
struct Store;

#[cfg(not(feature = "hydrate"))]
impl Store {
    fn get_item(&self, _key: &str) -> Result<Option<String>, ()> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), ()> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), ()> {
        Ok(())
    }
}

/// Run `op` against `window.localStorage`; `None` when the store is
/// unavailable (private mode, disabled storage).
fn with_store<R>(op: impl FnOnce(&Store) -> Option<R>) -> Option<R> {
    #[cfg(feature = "hydrate")]
    let store = web_sys::window()?.local_storage().ok().flatten()?;
    #[cfg(not(feature = "hydrate"))]
    let store = Store;
    op(&store)
}

/// Decoded value stored under `key`; unreadable entries count as missing.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    with_store(|store| store.get_item(key).ok().flatten()).and_then(|raw| serde_json::from_str(&raw).ok())
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        with_store(|store| store.set_item(key, &raw).ok());
    }
}

pub fn remove(key: &str) {
    with_store(|store| store.remove_item(key).ok());
}
