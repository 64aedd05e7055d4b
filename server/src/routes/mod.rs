//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the `/api/auth/*` endpoints and Leptos SSR rendering
//! under a single Axum router, serves the WASM/CSS bundle from `/pkg`, and
//! wraps everything in the route gate so every request is classified before
//! any handler runs.


pub mod auth;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::gate::{self, GateConfig, RoutePattern};

/// JSON API routes. Everything under `/api/auth/` sits behind the gate.
pub fn api_routes(gate: Arc<GateConfig>) -> Router {
    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .with_state(gate)
}

/// Install the route gate and request tracing around `router`.
pub fn gated(router: Router, gate: Arc<GateConfig>) -> Router {
    router
        .layer(middleware::from_fn_with_state(gate, gate::route_gate))
        .layer(TraceLayer::new_for_http())
}

/// Full application: API routes + Leptos SSR + `/pkg` assets, behind the gate.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&*leptos_options.site_root));

    let pkg_prefix = format!("/{}/", leptos_options.site_pkg_dir);
    let gate = Arc::new(config.gate().with_exclusion(RoutePattern::prefix(pkg_prefix)));
    let app = api_routes(gate.clone())
        .merge(leptos_router)
        .nest_service(
            &format!("/{}", leptos_options.site_pkg_dir),
            ServeDir::new(site_root.join(&*leptos_options.site_pkg_dir)),
        )
        .fallback_service(ServeDir::new(&site_root))
        .layer(CompressionLayer::new());

    Ok(gated(app, gate))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
