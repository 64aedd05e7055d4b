use super::*;
use crate::util::document::{DARK_CLASS, DetachedRoot, DocumentRoot, THEME_ATTR};
use crate::util::environment::FixedSignals;
use crate::util::storage::{MemoryStorage, PreferenceStore};

fn platform(storage: MemoryStorage, root: DetachedRoot) -> Platform {
    Platform::new(root, PreferenceStore::new(storage), FixedSignals::default())
}

#[test]
fn theme_wire_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::DEFAULT, Theme::Light);
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn pre_mount_render_ignores_storage() {
    for stored in ["dark", "light", "garbage"] {
        let storage = MemoryStorage::new();
        storage.insert_raw("theme", stored);
        let root = DetachedRoot::new();
        root.apply_theme_class(Theme::Dark);
        let _platform = platform(storage, root);

        let state = ThemeState::new();
        assert_eq!(state.theme(), Theme::Light, "stored {stored}");
        assert!(!state.mounted());
    }
}

#[test]
fn reconcile_adopts_stamped_root() {
    let storage = MemoryStorage::new();
    storage.insert_raw("theme", "light");
    let root = DetachedRoot::new();
    root.apply_theme_class(Theme::Dark);
    let platform = platform(storage, root);

    let mut state = ThemeState::new();
    assert!(state.reconcile(&platform));
    assert!(state.mounted());
    assert_eq!(state.theme(), Theme::Dark);
}

#[test]
fn reconcile_without_stamp_resolves_from_store_and_applies() {
    let storage = MemoryStorage::new();
    storage.insert_raw("theme", "dark");
    let root = DetachedRoot::new();
    let platform = platform(storage, root.clone());

    let mut state = ThemeState::new();
    state.reconcile(&platform);
    assert_eq!(state.theme(), Theme::Dark);
    assert!(root.has_class(DARK_CLASS));
    assert_eq!(root.attribute(THEME_ATTR).as_deref(), Some("dark"));
}

#[test]
fn reconcile_with_broken_storage_falls_back_to_light() {
    let root = DetachedRoot::new();
    let platform = platform(MemoryStorage::unavailable(), root.clone());

    let mut state = ThemeState::new();
    state.reconcile(&platform);
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(root.attribute(THEME_ATTR).as_deref(), Some("light"));
}

#[test]
fn reconcile_fires_only_once() {
    let root = DetachedRoot::new();
    root.apply_theme_class(Theme::Dark);
    let platform = platform(MemoryStorage::new(), root.clone());

    let mut state = ThemeState::new();
    assert!(state.reconcile(&platform));
    root.apply_theme_class(Theme::Light);
    assert!(!state.reconcile(&platform));
    assert_eq!(state.theme(), Theme::Dark);
}

#[test]
fn toggle_applies_and_persists() {
    let storage = MemoryStorage::new();
    let root = DetachedRoot::new();
    let platform = platform(storage.clone(), root.clone());

    let mut state = ThemeState::new();
    state.reconcile(&platform);
    assert_eq!(state.toggle(&platform), Theme::Dark);
    assert_eq!(state.theme(), Theme::Dark);
    assert!(root.has_class(DARK_CLASS));
    assert_eq!(PreferenceStore::new(storage.clone()).get::<Theme>(), Some(Theme::Dark));

    assert_eq!(state.toggle(&platform), Theme::Light);
    assert!(!root.has_class(DARK_CLASS));
    assert_eq!(PreferenceStore::new(storage).get::<Theme>(), Some(Theme::Light));
}

#[test]
fn set_theme_survives_storage_failure() {
    let root = DetachedRoot::new();
    let platform = platform(MemoryStorage::unavailable(), root.clone());

    let mut state = ThemeState::new();
    state.reconcile(&platform);
    state.set_theme(Theme::Dark, &platform);
    assert_eq!(state.theme(), Theme::Dark);
    assert!(root.has_class(DARK_CLASS));
}

#[test]
fn set_then_reload_resolves_to_same_theme() {
    let storage = MemoryStorage::new();
    let first = platform(storage.clone(), DetachedRoot::new());
    let mut state = ThemeState::new();
    state.reconcile(&first);
    state.set_theme(Theme::Dark, &first);

    // Fresh page: new root, new state, same storage.
    let reloaded = platform(storage, DetachedRoot::new());
    let mut fresh = ThemeState::new();
    assert_eq!(fresh.theme(), Theme::Light);
    fresh.reconcile(&reloaded);
    assert_eq!(fresh.theme(), Theme::Dark);
}
