//! Telephony webhook route configuration

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::voice::voice_webhook;
use crate::state::AppState;
use std::sync::Arc;

/// Create the webhook router
///
/// # Endpoint
///
/// `POST /` - form-encoded callback from the telephony platform
/// `GET /` - same callback with the fields in the query string
///
/// # Responses
///
/// - `200 text/xml` greeting when no `RecordingUrl` is present
/// - `200 text/xml` accepted or rejected after transcription
/// - `500 text/plain` when the recording could not be transcribed
pub fn create_voice_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(voice_webhook).post(voice_webhook))
        .layer(TraceLayer::new_for_http())
}
