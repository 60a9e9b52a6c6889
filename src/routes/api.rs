use axum::{Router, routing::get};

use crate::handlers::api;
use crate::state::AppState;
use std::sync::Arc;

/// Create the public API router
///
/// `GET /health` - liveness probe
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(api::health_check))
}
