use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.auth_cookie, "auth_token");
    assert_eq!(config.login_path, "/login");
    assert!(config.site_root.is_none());
}

#[test]
fn reads_all_variables() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", " 8080 "),
        ("SITE_ROOT", "/srv/site"),
        ("AUTH_COOKIE_NAME", "session"),
        ("LOGIN_PATH", "/signin"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_root, Some(PathBuf::from("/srv/site")));
    assert_eq!(config.gate().cookie_name(), "session");
    assert_eq!(config.gate().login_redirect("/auth/x"), "/signin?redirect=%2Fauth%2Fx");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "http"));
}

#[test]
fn relative_login_path_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("LOGIN_PATH", "login")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLoginPath(_)));
}

#[test]
fn empty_cookie_name_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("AUTH_COOKIE_NAME", " ")])).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyCookieName));
}
