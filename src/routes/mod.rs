//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the students pass-through API and the health check,
//! and stitches them with Leptos SSR rendering under a single Axum router.
//! Compiled WASM/CSS assets are served from `/pkg`.

pub mod students;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes proxied to the students backend, plus `/healthz`.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            students::STUDENTS_PATH,
            get(students::list_students).post(students::create_student),
        )
        .route(
            &format!("{}/{{id}}", students::STUDENTS_PATH),
            put(students::edit_student).delete(students::delete_student),
        )
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full host router: API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
