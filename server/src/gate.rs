//! Route gate — per-request credential enforcement for protected paths.
//!
//! DESIGN
//! ======
//! Classification is an ordered list of explicit path predicates evaluated
//! once per request: exclusions first (static assets, `/pkg` bundle), then
//! protected rules, otherwise public. Protected requests need a credential
//! from the `auth_token` cookie or an `Authorization: Bearer` header.
//! Missing credentials get a JSON 401 on API paths and a login redirect on
//! page paths.
//!
//! TRADE-OFFS
//! ==========
//! Credential presence is sufficient; token authenticity and expiry are not
//! checked here. The accepted credential is attached to the request
//! extensions so a handler that needs identity can validate it itself.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const DEFAULT_COOKIE_NAME: &str = "auth_token";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// PATTERNS
// =============================================================================

/// A single path predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    /// Path starts with the given prefix.
    Prefix(String),
    /// Path equals the given value.
    Exact(String),
    /// Path ends with `.<ext>` (dotfiles such as `/.png` included).
    Extension(String),
}

impl RoutePattern {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    pub fn extension(ext: impl Into<String>) -> Self {
        Self::Extension(ext.into())
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
            Self::Exact(exact) => path == exact,
            Self::Extension(ext) => {
                let segment = path.rsplit('/').next().unwrap_or(path);
                segment.rsplit_once('.').is_some_and(|(_, found)| found == ext)
            }
        }
    }
}

/// Response shape for a protected path lacking credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtectedKind {
    /// Browser page: redirect to login.
    Page,
    /// API endpoint: structured 401.
    Api,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Never inspected (static assets, framework internals).
    Excluded,
    Public,
    Protected(ProtectedKind),
}

// =============================================================================
// CREDENTIAL
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    Cookie,
    Header,
}

/// Opaque token found on a request. Only its presence is checked.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl Credential {
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

// =============================================================================
// GATE
// =============================================================================

/// Outcome of evaluating one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Forward unchanged; carries the credential when one was required.
    Pass(Option<Credential>),
    /// Protected API path without credentials.
    Unauthorized,
    /// Protected page path without credentials; holds the login location.
    RedirectToLogin(String),
}

#[derive(Clone, Debug)]
pub struct GateConfig {
    exclusions: Vec<RoutePattern>,
    protected: Vec<(RoutePattern, ProtectedKind)>,
    cookie_name: String,
    login_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COOKIE_NAME, DEFAULT_LOGIN_PATH)
    }
}

impl GateConfig {
    /// Standard rule set with a custom cookie name and login path.
    pub fn new(cookie_name: impl Into<String>, login_path: impl Into<String>) -> Self {
        let mut exclusions = vec![RoutePattern::prefix("/pkg/"), RoutePattern::exact("/favicon.ico")];
        exclusions.extend(["svg", "png", "jpg", "jpeg", "gif", "webp"].into_iter().map(RoutePattern::extension));

        Self {
            exclusions,
            protected: vec![
                (RoutePattern::prefix("/auth/"), ProtectedKind::Page),
                (RoutePattern::prefix("/api/auth/"), ProtectedKind::Api),
            ],
            cookie_name: cookie_name.into(),
            login_path: login_path.into(),
        }
    }

    #[must_use]
    pub fn with_exclusion(mut self, pattern: RoutePattern) -> Self {
        self.exclusions.push(pattern);
        self
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// First matching rule wins; exclusions are checked before protection.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.exclusions.iter().any(|p| p.matches(path)) {
            return RouteClass::Excluded;
        }
        self.protected
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map_or(RouteClass::Public, |(_, kind)| RouteClass::Protected(*kind))
    }

    /// Credential from the cookie, else from the `Authorization` header.
    ///
    /// A leading `Bearer ` is stripped from the header. Empty values count as
    /// absent.
    #[must_use]
    pub fn extract_credential(&self, headers: &HeaderMap) -> Option<Credential> {
        let jar = CookieJar::from_headers(headers);
        if let Some(token) = jar.get(&self.cookie_name).map(Cookie::value).filter(|v| !v.is_empty()) {
            return Some(Credential { token: token.to_owned(), source: CredentialSource::Cookie });
        }

        let raw = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())?;
        let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);
        (!token.is_empty()).then(|| Credential { token: token.to_owned(), source: CredentialSource::Header })
    }

    /// Login location carrying `path` as the percent-encoded return target.
    #[must_use]
    pub fn login_redirect(&self, path: &str) -> String {
        format!("{}?redirect={}", self.login_path, urlencoding::encode(path))
    }

    #[must_use]
    pub fn evaluate(&self, path: &str, headers: &HeaderMap) -> GateDecision {
        let kind = match self.classify(path) {
            RouteClass::Excluded | RouteClass::Public => return GateDecision::Pass(None),
            RouteClass::Protected(kind) => kind,
        };
        match (self.extract_credential(headers), kind) {
            (Some(credential), _) => GateDecision::Pass(Some(credential)),
            (None, ProtectedKind::Api) => GateDecision::Unauthorized,
            (None, ProtectedKind::Page) => GateDecision::RedirectToLogin(self.login_redirect(path)),
        }
    }
}

/// Axum middleware applying `GateConfig::evaluate` to every request.
pub async fn route_gate(State(gate): State<Arc<GateConfig>>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    match gate.evaluate(&path, request.headers()) {
        GateDecision::Pass(credential) => {
            if let Some(credential) = credential {
                tracing::debug!(
                    %path,
                    source = ?credential.source(),
                    token_len = credential.token().len(),
                    "route gate: credential present"
                );
                request.extensions_mut().insert(credential);
            }
            next.run(request).await
        }
        GateDecision::Unauthorized => {
            tracing::info!(%path, "route gate: rejected api request without credential");
            unauthorized()
        }
        GateDecision::RedirectToLogin(location) => {
            tracing::info!(%path, %location, "route gate: redirecting to login");
            Redirect::temporary(&location).into_response()
        }
    }
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "error": "Unauthorized" }))).into_response()
}
