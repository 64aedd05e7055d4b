use super::*;

#[test]
fn every_key_exists_in_both_tables() {
    for (key, _) in TH {
        assert!(lookup(Language::En, key).is_some(), "en missing {key}");
    }
    for (key, _) in EN {
        assert!(lookup(Language::Th, key).is_some(), "th missing {key}");
    }
}

#[test]
fn translate_returns_mapped_strings() {
    assert_eq!(translate(Language::Th, "nav.logo"), "เว็บไซต์");
    assert_eq!(translate(Language::En, "nav.logo"), "Website");
    assert_eq!(translate(Language::En, "theme.dark"), "Dark Mode");
}

#[test]
fn translate_echoes_missing_keys() {
    for language in [Language::Th, Language::En] {
        assert_eq!(translate(language, "does.not.exist"), "does.not.exist");
    }
}

#[test]
fn language_names_are_shared() {
    assert_eq!(translate(Language::Th, "lang.en"), translate(Language::En, "lang.en"));
    assert_eq!(translate(Language::Th, "lang.th"), "ไทย");
}
