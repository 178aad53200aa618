//! Minimal authentication backend: signup and login over a Postgres `users`
//! table with Argon2id password digests, plus static file serving.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Build the API router, everything under `/api`. Used by main and by tests.
pub fn create_app(state: AppState) -> axum::Router {
    let api_routes = axum::Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/health", get(http::health))
        .fallback(http::api_not_found);

    axum::Router::new()
        .nest("/api", api_routes)
        .with_state(state)
}

/// Full application: API, static files from `static_dir` (unknown paths get its
/// `index.html`), CORS and request tracing.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> axum::Router {
    let static_dir = static_dir.as_ref();
    let entry = ServeFile::new(static_dir.join("index.html"));

    create_app(state)
        .fallback_service(ServeDir::new(static_dir).fallback(entry))
        .layer(middleware::cors_layer())
        .layer(middleware::trace_layer())
}
