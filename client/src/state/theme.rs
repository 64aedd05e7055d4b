//! Theme preference state (light/dark).
//!
//! DESIGN
//! ======
//! `ThemeState` wraps a two-phase `Preference<Theme>`. Before mount it renders
//! `Light` no matter what was stored, matching the server output. `reconcile`
//! adopts whatever the pre-render script stamped on `<html>`; subsequent
//! changes write the root and storage together.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::preference::{Preference, PreferenceValue};
use crate::util::init_script;
use crate::util::platform::Platform;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Translation key for the mode label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Light => "theme.light",
            Self::Dark => "theme.dark",
        }
    }
}

impl PreferenceValue for Theme {
    const KEY: &'static str = "theme";
    const DEFAULT: Self = Self::Light;

    fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Theme provider state, held in an `RwSignal` context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    preference: Preference<Theme>,
}

impl ThemeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Theme to render; `Light` until mounted.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.preference.rendered()
    }

    #[must_use]
    pub fn mounted(&self) -> bool {
        self.preference.mounted()
    }

    /// Post-mount reconciliation. Runs once; later calls return `false`.
    ///
    /// The stamped root is authoritative. Without a stamp, the theme is
    /// resolved from storage or the system signal and applied to the root.
    pub fn reconcile(&mut self, platform: &Platform) -> bool {
        if self.preference.mounted() {
            return false;
        }
        let theme = platform.root.stamped_theme().unwrap_or_else(|| {
            let resolved = init_script::resolve_theme(&platform.store, platform.signals.as_ref()).unwrap_or_else(|e| {
                log::warn!("theme resolution failed, using default: {e}");
                Theme::DEFAULT
            });
            platform.root.apply_theme_class(resolved);
            resolved
        });
        self.preference.reconcile(theme)
    }

    /// Apply, persist, and record an explicit theme choice.
    pub fn set_theme(&mut self, theme: Theme, platform: &Platform) {
        self.preference.set(theme);
        platform.root.apply_theme_class(theme);
        platform.store.set(theme);
    }

    /// Flip the rendered theme. Returns the new theme.
    pub fn toggle(&mut self, platform: &Platform) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next, platform);
        next
    }
}
