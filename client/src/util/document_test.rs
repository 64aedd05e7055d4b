use super::*;

#[test]
fn applying_theme_twice_is_idempotent() {
    for theme in [Theme::Light, Theme::Dark] {
        let once = DetachedRoot::new();
        once.apply_theme_class(theme);

        let twice = DetachedRoot::new();
        twice.apply_theme_class(theme);
        twice.apply_theme_class(theme);

        assert_eq!(once.snapshot(), twice.snapshot(), "theme {theme:?}");
    }
}

#[test]
fn dark_theme_sets_class_and_attribute() {
    let root = DetachedRoot::new();
    root.apply_theme_class(Theme::Dark);
    assert!(root.has_class(DARK_CLASS));
    assert_eq!(root.attribute(THEME_ATTR).as_deref(), Some("dark"));
}

#[test]
fn light_theme_removes_stale_dark_class() {
    let root = DetachedRoot::new();
    root.apply_theme_class(Theme::Dark);
    root.apply_theme_class(Theme::Light);
    assert!(!root.has_class(DARK_CLASS));
    assert_eq!(root.attribute(THEME_ATTR).as_deref(), Some("light"));
}

#[test]
fn language_is_mirrored_on_both_attributes() {
    let root = DetachedRoot::new();
    root.apply_language_attr(Language::En);
    assert_eq!(root.attribute(LANG_ATTR).as_deref(), Some("en"));
    assert_eq!(root.attribute(LANGUAGE_ATTR).as_deref(), Some("en"));
}

#[test]
fn stamped_theme_prefers_data_attribute_then_class() {
    let root = DetachedRoot::new();
    assert_eq!(root.stamped_theme(), None);

    root.add_class(DARK_CLASS);
    assert_eq!(root.stamped_theme(), Some(Theme::Dark));

    root.set_attribute(THEME_ATTR, "light");
    assert_eq!(root.stamped_theme(), Some(Theme::Light));
}

#[test]
fn stamped_theme_ignores_invalid_attribute() {
    let root = DetachedRoot::new();
    root.set_attribute(THEME_ATTR, "sepia");
    assert_eq!(root.stamped_theme(), None);
}

#[test]
fn stamped_language_falls_back_to_lang_attribute() {
    let root = DetachedRoot::new();
    root.set_attribute(LANG_ATTR, "en");
    assert_eq!(root.stamped_language(), Some(Language::En));

    root.set_attribute(LANGUAGE_ATTR, "th");
    assert_eq!(root.stamped_language(), Some(Language::Th));

    root.set_attribute(LANGUAGE_ATTR, "de");
    assert_eq!(root.stamped_language(), Some(Language::En));
}

#[test]
fn browser_root_is_inert_off_browser() {
    let root = BrowserRoot;
    root.apply_theme_class(Theme::Dark);
    assert!(!root.has_class(DARK_CLASS));
    assert_eq!(root.stamped_theme(), None);
    assert_eq!(root.stamped_language(), None);
}
