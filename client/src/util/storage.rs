//! Persistent preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsers may disable `localStorage` entirely (privacy modes, policy), so
//! every backend call is fallible. `PreferenceStore` is the boundary where
//! those failures are swallowed: callers only ever see "absent" and fall back
//! to defaults. The pre-render resolver uses `try_get` because it must tell a
//! broken store apart from an empty one.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::state::preference::PreferenceValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage read failed for key {key}")]
    Read { key: String },
    #[error("storage write failed for key {key}")]
    Write { key: String },
}

/// Raw string key/value storage.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// BROWSER BACKEND
// =============================================================================

/// `window.localStorage`. Looked up on every call so the handle stays `Send`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Read { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Write { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================================
// IN-MEMORY BACKEND
// =============================================================================

/// In-process storage used off-browser. Clones share the same slots, so a
/// fresh `PreferenceStore` over a clone behaves like a page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    slots: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that fails every call, like a browser with storage disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.set_available(false);
        storage
    }

    pub fn set_available(&self, available: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.unavailable = !available;
        }
    }

    /// Seed a raw value, bypassing validation.
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.slots.insert(key.to_owned(), value.to_owned());
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.lock().map_err(|_| StorageError::Read { key: key.to_owned() })?;
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(inner.slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().map_err(|_| StorageError::Write { key: key.to_owned() })?;
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        inner.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// PREFERENCE STORE
// =============================================================================

/// Typed get/set over a backend. Never fails outward.
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Arc<dyn StorageBackend>,
}

impl PreferenceStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Typed read that keeps backend failures visible.
    ///
    /// Stored values outside the value space are reported as absent.
    ///
    /// # Errors
    ///
    /// Returns the backend error when storage cannot be read.
    pub fn try_get<T: PreferenceValue>(&self) -> Result<Option<T>, StorageError> {
        let raw = self.backend.read(T::KEY)?;
        Ok(raw.as_deref().and_then(|raw| {
            let parsed = T::parse(raw);
            if parsed.is_none() {
                log::debug!("ignoring invalid stored value {raw:?} for {}", T::KEY);
            }
            parsed
        }))
    }

    /// Read a preference; storage failures and invalid values are `None`.
    pub fn get<T: PreferenceValue>(&self) -> Option<T> {
        match self.try_get::<T>() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("preference read failed for {}: {e}", T::KEY);
                None
            }
        }
    }

    /// Persist a preference. Best effort: a failed write is logged and dropped.
    pub fn set<T: PreferenceValue>(&self, value: T) {
        if let Err(e) = self.backend.write(T::KEY, value.as_str()) {
            log::warn!("preference write failed for {}: {e}", T::KEY);
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}
