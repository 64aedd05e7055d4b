//! Client environment handles injected at the application root.
//!
//! DESIGN
//! ======
//! One `Platform` is built in `App` and provided through context. Providers
//! never reach for `window` directly; they go through these handles, which
//! keeps the preference state machines runnable off-browser.

use std::sync::Arc;

use super::document::{BrowserRoot, DetachedRoot, DocumentRoot};
use super::environment::{BrowserSignals, EnvironmentSignals, FixedSignals};
use super::storage::{LocalStorage, MemoryStorage, PreferenceStore};

#[derive(Clone)]
pub struct Platform {
    pub root: Arc<dyn DocumentRoot>,
    pub store: PreferenceStore,
    pub signals: Arc<dyn EnvironmentSignals>,
}

impl Platform {
    pub fn new(
        root: impl DocumentRoot + 'static,
        store: PreferenceStore,
        signals: impl EnvironmentSignals + 'static,
    ) -> Self {
        Self { root: Arc::new(root), store, signals: Arc::new(signals) }
    }

    /// Real document, `localStorage`, and browser signals.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserRoot, PreferenceStore::new(LocalStorage), BrowserSignals)
    }

    /// In-memory root and storage with no ambient signals.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(
            DetachedRoot::new(),
            PreferenceStore::new(MemoryStorage::new()),
            FixedSignals::default(),
        )
    }

    /// Platform for the current build target.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(feature = "hydrate") { Self::browser() } else { Self::detached() }
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform").field("store", &self.store).finish_non_exhaustive()
    }
}
