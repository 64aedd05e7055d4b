//! Language preference state (Thai/English) and translation lookup.
//!
//! DESIGN
//! ======
//! Same two-phase shape as the theme: `Th` is rendered until mount so the
//! server markup and first client frame agree, then the stamped `<html>`
//! language takes over. Translations follow the rendered language.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use super::preference::{Preference, PreferenceValue};
use crate::i18n;
use crate::util::init_script;
use crate::util::platform::Platform;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Th,
    En,
}

impl Language {
    /// The other supported language; used by the navbar switch.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Th => Self::En,
            Self::En => Self::Th,
        }
    }

    /// Translation key for the language's own name.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Th => "lang.th",
            Self::En => "lang.en",
        }
    }
}

impl PreferenceValue for Language {
    const KEY: &'static str = "language";
    const DEFAULT: Self = Self::Th;

    fn as_str(self) -> &'static str {
        match self {
            Self::Th => "th",
            Self::En => "en",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "th" => Some(Self::Th),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

/// Language provider state, held in an `RwSignal` context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LanguageState {
    preference: Preference<Language>,
}

impl LanguageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Language to render; `Th` until mounted.
    #[must_use]
    pub fn language(&self) -> Language {
        self.preference.rendered()
    }

    #[must_use]
    pub fn mounted(&self) -> bool {
        self.preference.mounted()
    }

    /// Post-mount reconciliation. Runs once; later calls return `false`.
    pub fn reconcile(&mut self, platform: &Platform) -> bool {
        if self.preference.mounted() {
            return false;
        }
        let language = platform.root.stamped_language().unwrap_or_else(|| {
            let resolved =
                init_script::resolve_language(&platform.store, platform.signals.as_ref()).unwrap_or_else(|e| {
                    log::warn!("language resolution failed, using default: {e}");
                    Language::DEFAULT
                });
            platform.root.apply_language_attr(resolved);
            resolved
        });
        self.preference.reconcile(language)
    }

    /// Apply, persist, and record an explicit language choice.
    pub fn set_language(&mut self, language: Language, platform: &Platform) {
        self.preference.set(language);
        platform.root.apply_language_attr(language);
        platform.store.set(language);
    }

    /// Translate `key` in the rendered language, echoing unmapped keys.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.language(), key)
    }
}
