use super::*;

#[test]
fn return_target_keeps_local_paths() {
    assert_eq!(return_target(Some("/auth/profile")), "/auth/profile");
    assert_eq!(return_target(Some("/auth/profile?tab=2")), "/auth/profile?tab=2");
}

#[test]
fn return_target_rejects_external_and_missing() {
    assert_eq!(return_target(Some("https://evil.example")), "/");
    assert_eq!(return_target(Some("//evil.example")), "/");
    assert_eq!(return_target(Some("")), "/");
    assert_eq!(return_target(None), "/");
}

#[test]
fn return_target_rejects_backslash_host() {
    assert_eq!(return_target(Some("/\\evil.example")), "/");
    assert_eq!(return_target(Some("/\\/evil.example")), "/");
}

#[test]
fn return_target_rejects_control_characters() {
    assert_eq!(return_target(Some("/\t/evil.example")), "/");
    assert_eq!(return_target(Some("/auth\n/profile")), "/");
}

#[test]
fn return_target_keeps_root_and_backslash_later_in_path() {
    assert_eq!(return_target(Some("/")), "/");
    assert_eq!(return_target(Some("/docs/a\\b")), "/docs/a\\b");
}
