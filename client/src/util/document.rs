//! Document-root side effects for theme and language.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `<html>` element carries the resolved preferences: a `dark` class and
//! `data-theme` for the theme, `lang` and `data-language` for the language.
//! The pre-render script stamps them first; providers read them back on mount
//! and rewrite them on every change. Off-browser the same contract runs
//! against `DetachedRoot`, an in-memory element.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use crate::state::language::Language;
use crate::state::preference::PreferenceValue;
use crate::state::theme::Theme;

pub const DARK_CLASS: &str = "dark";
pub const THEME_ATTR: &str = "data-theme";
pub const LANG_ATTR: &str = "lang";
pub const LANGUAGE_ATTR: &str = "data-language";

/// Sink for root-element mutations, plus readback of what was stamped.
pub trait DocumentRoot: Send + Sync {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    /// Apply `theme`. The stale `dark` class is always removed first, so
    /// applying the same theme twice leaves identical state.
    fn apply_theme_class(&self, theme: Theme) {
        self.remove_class(DARK_CLASS);
        if theme == Theme::Dark {
            self.add_class(DARK_CLASS);
        }
        self.set_attribute(THEME_ATTR, theme.as_str());
    }

    /// Mirror `language` onto both `lang` and `data-language`.
    fn apply_language_attr(&self, language: Language) {
        self.set_attribute(LANG_ATTR, language.as_str());
        self.set_attribute(LANGUAGE_ATTR, language.as_str());
    }

    /// Theme stamped on the root: `data-theme` first, then the `dark` class.
    fn stamped_theme(&self) -> Option<Theme> {
        if let Some(theme) = self.attribute(THEME_ATTR).as_deref().and_then(Theme::parse) {
            return Some(theme);
        }
        self.has_class(DARK_CLASS).then_some(Theme::Dark)
    }

    /// Language stamped on the root: `data-language` first, then `lang`.
    fn stamped_language(&self) -> Option<Language> {
        self.attribute(LANGUAGE_ATTR)
            .as_deref()
            .and_then(Language::parse)
            .or_else(|| self.attribute(LANG_ATTR).as_deref().and_then(Language::parse))
    }
}

// =============================================================================
// BROWSER ROOT
// =============================================================================

/// `document.documentElement`. No-ops when there is no document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRoot;

#[cfg(feature = "hydrate")]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

impl DocumentRoot for BrowserRoot {
    fn has_class(&self, class: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            document_element().is_some_and(|el| el.class_list().contains(class))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
            false
        }
    }

    fn add_class(&self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = document_element() {
                let _ = el.class_list().add_1(class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }

    fn remove_class(&self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = document_element() {
                let _ = el.class_list().remove_1(class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            document_element().and_then(|el| el.get_attribute(name))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = document_element() {
                let _ = el.set_attribute(name, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
        }
    }
}

// =============================================================================
// DETACHED ROOT
// =============================================================================

/// In-memory root element for SSR and tests. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct DetachedRoot {
    inner: Arc<Mutex<DetachedInner>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetachedInner {
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
}

impl DetachedRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current classes and attributes.
    #[must_use]
    pub fn snapshot(&self) -> DetachedInner {
        self.inner.lock().map(|inner| inner.clone()).unwrap_or_default()
    }
}

impl DocumentRoot for DetachedRoot {
    fn has_class(&self, class: &str) -> bool {
        self.inner.lock().is_ok_and(|inner| inner.classes.contains(class))
    }

    fn add_class(&self, class: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.classes.remove(class);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.lock().ok().and_then(|inner| inner.attributes.get(name).cloned())
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.attributes.insert(name.to_owned(), value.to_owned());
        }
    }
}
