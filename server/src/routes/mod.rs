//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the registration API and stitches it with Leptos SSR
//! rendering of the meetup page under a single Axum router. The API is open
//! to any origin so a separately hosted page can still post to it.

pub mod health;
pub mod register;

use std::path::PathBuf;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Registration API and health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/register", post(register::register))
        .route("/api/registrations", get(register::list_registrations))
        .route("/health", get(health::health))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + the Leptos-rendered meetup page at `/`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Full router, degrading to the API alone when the page cannot be served.
pub fn app(state: AppState) -> Router {
    match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "page rendering disabled; serving API only");
            api_routes(state)
        }
    }
}
