//! Snapshot persistence for client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules never touch `localStorage` directly. They receive a
//! `SnapshotStore` so browser builds persist through `LocalStorageStore` while
//! tests inject a `MemoryStore` and inspect the raw JSON it holds.
//!
//! ERROR HANDLING
//! ==============
//! Loads are best-effort: a missing or malformed snapshot yields `None` (the
//! malformed case logs a warning). Writes report failures to the caller, which
//! decides whether the in-memory change still stands.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure while writing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("local storage write failed: {0}")]
    Write(String),
}

/// Load/save port for a single JSON snapshot of `T`.
pub trait SnapshotStore<T> {
    /// Read the stored snapshot, or `None` when absent or unreadable.
    fn load(&self) -> Option<T>;

    /// Replace the stored snapshot with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or written.
    fn save(&self, value: &T) -> Result<(), PersistError>;

    /// Remove the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the removal.
    fn clear(&self) -> Result<(), PersistError>;
}

/// Parse a raw snapshot, warning (not failing) when it is malformed.
pub fn decode_snapshot<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("ignoring malformed {key} snapshot: {e}");
            None
        }
    }
}

/// `localStorage`-backed store bound to one key.
///
/// Outside the browser (`ssr`, native tests) loads return `None` and writes
/// are accepted no-ops, which keeps server rendering deterministic.
#[derive(Debug)]
pub struct LocalStorageStore<T> {
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> LocalStorageStore<T> {
    pub const fn new(key: &'static str) -> Self {
        Self { key, _value: PhantomData }
    }

    /// Storage key, for log context.
    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<T> Clone for LocalStorageStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LocalStorageStore<T> {}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl<T: Serialize + DeserializeOwned> SnapshotStore<T> for LocalStorageStore<T> {
    fn load(&self) -> Option<T> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(self.key).ok().flatten()?;
            decode_snapshot(self.key, &raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, value: &T) -> Result<(), PersistError> {
        let raw = serde_json::to_string(value)?;
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(PersistError::Unavailable)?;
            storage
                .set_item(self.key, &raw)
                .map_err(|e| PersistError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), PersistError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(PersistError::Unavailable)?;
            storage
                .remove_item(self.key)
                .map_err(|e| PersistError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

/// In-memory store holding the raw JSON text, shared between clones.
#[derive(Debug)]
pub struct MemoryStore<T> {
    key: &'static str,
    raw: Arc<Mutex<Option<String>>>,
    _value: PhantomData<fn() -> T>,
}

impl<T> MemoryStore<T> {
    pub fn new(key: &'static str) -> Self {
        Self { key, raw: Arc::new(Mutex::new(None)), _value: PhantomData }
    }

    /// Start from a pre-existing raw snapshot (which may be malformed).
    pub fn with_raw(key: &'static str, raw: &str) -> Self {
        let store = Self::new(key);
        store.set_raw(Some(raw.to_owned()));
        store
    }

    /// Current raw snapshot text.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_raw(&self, value: Option<String>) {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self { key: self.key, raw: Arc::clone(&self.raw), _value: PhantomData }
    }
}

impl<T: Serialize + DeserializeOwned> SnapshotStore<T> for MemoryStore<T> {
    fn load(&self) -> Option<T> {
        let raw = self.raw()?;
        decode_snapshot(self.key, &raw)
    }

    fn save(&self, value: &T) -> Result<(), PersistError> {
        self.set_raw(Some(serde_json::to_string(value)?));
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistError> {
        self.set_raw(None);
        Ok(())
    }
}
