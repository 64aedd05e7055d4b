//! Pre-render preference initializer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle mounts well after first paint. To avoid painting the wrong
//! theme, the SSR shell embeds `init_script()` in `<head>`: a synchronous
//! snippet that resolves theme and language from storage or system signals
//! and stamps them on `<html>` before the body renders. `resolve_theme` and
//! `resolve_language` are the same resolution in Rust; providers fall back
//! to them on mount when the root carries no stamp.
//!
//! Resolution order
//! ================
//! 1. theme: persisted `light|dark`, else `prefers-color-scheme: dark`, else light
//! 2. language: persisted `th|en`, else locale (`th*` -> th, other -> en), else th
//! 3. any storage failure: light + th

#[cfg(test)]
#[path = "init_script_test.rs"]
mod init_script_test;

use super::document::{DARK_CLASS, LANG_ATTR, LANGUAGE_ATTR, THEME_ATTR};
use super::environment::EnvironmentSignals;
use super::storage::{PreferenceStore, StorageError};
use crate::state::language::Language;
use crate::state::preference::PreferenceValue;
use crate::state::theme::Theme;

/// Locale prefix that selects the primary language.
const PRIMARY_LOCALE_PREFIX: &str = "th";

/// Resolve the theme from storage, then the system dark-mode signal.
///
/// # Errors
///
/// Returns the storage error when the persisted slot cannot be read.
pub fn resolve_theme(store: &PreferenceStore, signals: &dyn EnvironmentSignals) -> Result<Theme, StorageError> {
    if let Some(theme) = store.try_get::<Theme>()? {
        return Ok(theme);
    }
    Ok(if signals.prefers_dark().unwrap_or(false) { Theme::Dark } else { Theme::Light })
}

/// Resolve the language from storage, then the client locale.
///
/// # Errors
///
/// Returns the storage error when the persisted slot cannot be read.
pub fn resolve_language(
    store: &PreferenceStore,
    signals: &dyn EnvironmentSignals,
) -> Result<Language, StorageError> {
    if let Some(language) = store.try_get::<Language>()? {
        return Ok(language);
    }
    Ok(language_for_locale(signals.locale().as_deref()))
}

/// Map a locale tag to a supported language. An empty tag counts as absent.
#[must_use]
pub fn language_for_locale(locale: Option<&str>) -> Language {
    match locale.filter(|tag| !tag.is_empty()) {
        Some(tag) if tag.to_ascii_lowercase().starts_with(PRIMARY_LOCALE_PREFIX) => Language::Th,
        Some(_) => Language::En,
        None => Language::DEFAULT,
    }
}

/// Inline `<head>` script performing the same resolution in the browser.
#[must_use]
pub fn init_script() -> String {
    let config = serde_json::json!({
        "themeKey": Theme::KEY,
        "languageKey": Language::KEY,
        "themes": [Theme::Light.as_str(), Theme::Dark.as_str()],
        "languages": [Language::Th.as_str(), Language::En.as_str()],
        "darkClass": DARK_CLASS,
        "themeAttr": THEME_ATTR,
        "langAttr": LANG_ATTR,
        "languageAttr": LANGUAGE_ATTR,
        "primaryPrefix": PRIMARY_LOCALE_PREFIX,
        "primaryLanguage": Language::Th.as_str(),
        "secondaryLanguage": Language::En.as_str(),
        "fallbackTheme": Theme::DEFAULT.as_str(),
        "fallbackLanguage": Language::DEFAULT.as_str(),
    });

    format!(
        "(function(c){{\
var r=document.documentElement;\
function apply(t,l){{r.classList.remove(c.darkClass);if(t===\"dark\"){{r.classList.add(c.darkClass);}}\
r.setAttribute(c.themeAttr,t);r.setAttribute(c.langAttr,l);r.setAttribute(c.languageAttr,l);}}\
try{{\
var t=localStorage.getItem(c.themeKey);\
if(c.themes.indexOf(t)<0){{t=window.matchMedia&&window.matchMedia(\"(prefers-color-scheme: dark)\").matches?\"dark\":\"light\";}}\
var l=localStorage.getItem(c.languageKey);\
if(c.languages.indexOf(l)<0){{var n=navigator.language;\
l=n?(n.toLowerCase().indexOf(c.primaryPrefix)===0?c.primaryLanguage:c.secondaryLanguage):c.fallbackLanguage;}}\
apply(t,l);\
}}catch(e){{apply(c.fallbackTheme,c.fallbackLanguage);}}\
}})({config});"
    )
}
