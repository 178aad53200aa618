//! Shared state and the small HTTP handlers: health and API 404.

use axum::{http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

use crate::auth::Passwords;
use crate::db::AccountStore;

/// Shared application state for the API handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub passwords: Passwords,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, passwords: Passwords) -> Self {
        Self { store, passwords }
    }
    pub fn store(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }
    pub fn passwords(&self) -> &Passwords {
        &self.passwords
    }
}

/// GET /api/health: liveness check.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "accounts-api" })),
    )
}

/// Any unmatched path under /api. Keeps API misses out of the static fallback.
pub async fn api_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
