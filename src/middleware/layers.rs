//! Cross-cutting layers: CORS and request tracing.

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Any origin, method and header; the API carries no cookies or tokens.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// One span per request, logged at the subscriber's level.
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
