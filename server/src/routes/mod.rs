//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API surface is the login/logout echo pair; everything else falls
//! through to the client dist, with `index.html` served for unmatched
//! paths so client-side views survive a reload.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Resolve the client dist directory served at `/`.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application router: API routes plus the SPA static fallback.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let dist = static_dir();
    let spa = ServeDir::new(&dist)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .fallback_service(spa)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
