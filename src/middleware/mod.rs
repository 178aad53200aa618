//! Request extractors and tower layers shared by the router.

pub mod json;
pub mod layers;

pub use json::AppJson;
pub use layers::{cors_layer, trace_layer};
