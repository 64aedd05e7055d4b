//! Login landing page targeted by the server's route gate.
//!
//! The gate redirects unauthenticated page requests to
//! `/login?redirect=<path>`; this page surfaces that return target.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Return target from the `redirect` query parameter, restricted to local paths.
#[must_use]
pub fn return_target(raw: Option<&str>) -> String {
    match raw {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => "/".to_owned(),
    }
}

/// `/`-rooted and not protocol-relative. Browsers read `\` as `/`, so `/\host`
/// is rejected like `//host`; control characters are stripped by URL parsers
/// and are rejected outright.
fn is_local_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/' | '\\'))
        && !path.chars().any(char::is_control)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let target = move || return_target(query.read().get("redirect").as_deref());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">
                    "Sign in to continue to "
                    <code>{target}</code>
                </p>
                <a href=target class="login-button">
                    "Continue"
                </a>
            </div>
        </div>
    }
}
