//! Two-phase preference value shared by the theme and language providers.
//!
//! DESIGN
//! ======
//! A preference renders its hardcoded default until the client has reconciled
//! with the document root after mount. Server output and the first hydrated
//! frame therefore always agree, and the real value only appears once the
//! `Pending -> Reconciled` transition has fired.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt::Debug;

/// A named, persisted user setting with a closed value space.
pub trait PreferenceValue: Copy + Eq + Debug + Send + Sync + 'static {
    /// Storage key for the persisted slot.
    const KEY: &'static str;
    /// Value rendered before reconciliation and used as the last-resort fallback.
    const DEFAULT: Self;

    /// Wire representation written to storage and root attributes.
    fn as_str(self) -> &'static str;

    /// Parse a stored or stamped value. Anything outside the value space is `None`.
    fn parse(raw: &str) -> Option<Self>;
}

/// Render phase of a preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Server render and pre-mount client render: only the default is visible.
    #[default]
    Pending,
    /// The client has read the authoritative value after mount.
    Reconciled,
}

/// Current value plus render phase for one preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preference<T: PreferenceValue> {
    value: T,
    phase: Phase,
}

impl<T: PreferenceValue> Preference<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { value: T::DEFAULT, phase: Phase::Pending }
    }

    /// Value to render. Always `T::DEFAULT` until reconciled.
    #[must_use]
    pub fn rendered(&self) -> T {
        match self.phase {
            Phase::Pending => T::DEFAULT,
            Phase::Reconciled => self.value,
        }
    }

    /// Last value written, regardless of phase.
    #[must_use]
    pub fn current(&self) -> T {
        self.value
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn mounted(&self) -> bool {
        self.phase == Phase::Reconciled
    }

    /// Fire the one-way `Pending -> Reconciled` transition with the resolved value.
    ///
    /// Returns `false` (and leaves the value untouched) if already reconciled.
    pub fn reconcile(&mut self, resolved: T) -> bool {
        if self.phase == Phase::Reconciled {
            return false;
        }
        self.value = resolved;
        self.phase = Phase::Reconciled;
        true
    }

    /// Record an explicit user choice.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }
}

impl<T: PreferenceValue> Default for Preference<T> {
    fn default() -> Self {
        Self::new()
    }
}
