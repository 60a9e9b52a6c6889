use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while turning a recording URL into a transcript.
///
/// Each variant carries the failed operation and its underlying cause as a
/// message; callers are expected to log it and answer with a generic failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TranscribeError {
    #[error("Could not fetch audio: {0}")]
    FetchError(String),

    #[error("Could not read audio response: {0}")]
    ReadError(String),

    #[error("Could not encode speech request: {0}")]
    EncodeError(String),

    #[error("Could not send speech request: {0}")]
    RequestError(String),

    #[error("Could not decode speech response: {0}")]
    DecodeError(String),

    #[error("Speech API error: {code} {status} {message}")]
    ServiceError {
        code: i32,
        status: String,
        message: String,
    },

    #[error("No transcriptions found")]
    NoTranscriptionError,

    #[error("Invalid speech configuration: {0}")]
    ConfigurationError(String),
}

/// Converts a recorded clip, addressed by URL, into text.
///
/// The webhook only depends on this trait, so the HTTP-backed
/// [`SpeechClient`](super::SpeechClient) can be swapped for a fake in tests.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Fetch the recording and return the first transcript alternative verbatim.
    async fn transcribe(&self, recording_url: &str) -> Result<String, TranscribeError>;

    /// Human readable provider description for logs.
    fn get_provider_info(&self) -> &'static str;
}
