//! Auth API routes. Reachable only with a credential (see `gate`).

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::Extension;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::gate::{Credential, CredentialSource, GateConfig};

/// `GET /api/auth/me` — report the credential the gate accepted.
pub async fn me(Extension(credential): Extension<Credential>) -> Json<serde_json::Value> {
    let source = match credential.source() {
        CredentialSource::Cookie => "cookie",
        CredentialSource::Header => "header",
    };
    Json(serde_json::json!({ "authenticated": true, "source": source }))
}

/// `POST /api/auth/logout` — clear the auth cookie.
pub async fn logout(State(gate): State<Arc<GateConfig>>, jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build((gate.cookie_name().to_owned(), "")).path("/");
    (jar.remove(cookie), StatusCode::NO_CONTENT)
}
