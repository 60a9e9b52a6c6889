use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::core::speech::TranscribeError;

/// Body sent to the telephony platform for any transcription failure.
pub const TRANSCRIBE_FAILURE_BODY: &str = "could not transcribe";

/// Errors surfaced by the webhook handlers.
///
/// The caller never sees the cause; it is only available to server-side logs
/// through `Display`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not transcribe: {0}")]
    Transcription(#[from] TranscribeError),

    #[error("could not transcribe: transcription task failed: {0}")]
    TaskFailed(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Transcription(_) | AppError::TaskFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            )],
            TRANSCRIBE_FAILURE_BODY,
        )
            .into_response()
    }
}
