pub mod api;
pub mod voice;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// All routes, without middleware layers or state.
pub fn create_router() -> Router<Arc<AppState>> {
    api::create_api_router().merge(voice::create_voice_router())
}
