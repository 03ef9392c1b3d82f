//! Browser `localStorage` helpers for small JSON values.
//!
//! Reads treat a missing window, missing storage, a missing key, or a value
//! that fails to decode as "nothing stored". Writes and removals are best
//! effort; storage quota or privacy-mode failures are logged and otherwise
//! ignored. Outside the browser build every helper is a no-op.

use serde::{Serialize, de::DeserializeOwned};

/// Loads and decodes a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()?;
        let raw = storage.get_item(key).ok().flatten()?;
        decode(key, &raw)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

/// Encodes `value` as JSON and stores it under `key`, replacing any previous value.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to encode local storage value");
            return;
        }
    };

    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            tracing::warn!(key, "failed to write local storage value");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, raw);
    }
}

/// Removes whatever is stored under `key`.
pub fn remove(key: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
    }
}

/// Decodes a stored JSON string, logging and discarding corrupt values.
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(key, error = %err, "ignoring unreadable local storage value");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
