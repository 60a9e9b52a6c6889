//! HTTP-backed transcriber.
//!
//! # Flow
//!
//! 1. `fetch_audio` downloads the recording from the telephony media host
//! 2. `fetch_transcription` posts it, base64-encoded, to the speech endpoint
//! 3. The first alternative of the first result is returned verbatim
//!
//! The steps are strictly sequential and never retried; any failure is
//! returned to the caller as-is.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use tracing::{debug, info};
use url::Url;

use super::base::{TranscribeError, Transcriber};
use super::config::SpeechConfig;
use super::messages::{TranscriptionRequest, TranscriptionResponse};

/// User-Agent header value for outbound requests.
const USER_AGENT: &str = concat!("voicegate/", env!("CARGO_PKG_VERSION"));

/// Transcriber calling the synchronous speech recognition REST API.
///
/// Cheap to clone; the inner `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct SpeechClient {
    http_client: Client,
    /// Full endpoint including the key parameter. Never logged.
    endpoint: Url,
    /// Endpoint without credentials, for logs.
    endpoint_for_logs: String,
}

impl SpeechClient {
    /// Create a client for the given endpoint.
    ///
    /// The endpoint URL is built once here; an invalid URL is rejected up front.
    pub fn new(config: &SpeechConfig) -> Result<Self, TranscribeError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                TranscribeError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
            })?;

        Self::with_http_client(config, http_client)
    }

    /// Create a client sharing an existing `reqwest::Client`.
    pub fn with_http_client(
        config: &SpeechConfig,
        http_client: Client,
    ) -> Result<Self, TranscribeError> {
        Ok(Self {
            http_client,
            endpoint: config.endpoint_url()?,
            endpoint_for_logs: config.redacted_endpoint(),
        })
    }

    /// Download the recording at `url` into memory.
    ///
    /// Any status other than 200 is a failure, including other 2xx codes.
    pub async fn fetch_audio(&self, url: &str) -> Result<Bytes, TranscribeError> {
        debug!("Fetching recording from {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| TranscribeError::FetchError(format!("could not fetch {url}: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TranscribeError::FetchError(format!(
                "fetched with status: {status}"
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| TranscribeError::ReadError(e.to_string()))?;

        info!("Fetched recording: {} bytes", audio.len());
        Ok(audio)
    }

    /// Submit raw audio to the speech service and return the first transcript.
    pub async fn fetch_transcription(&self, audio: &[u8]) -> Result<String, TranscribeError> {
        let body = TranscriptionRequest::new(audio).to_json()?;

        debug!(
            "Sending {} byte recognition request to {}",
            body.len(),
            self.endpoint_for_logs
        );

        // The service reports failures in the body, so the HTTP status is not checked.
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TranscribeError::RequestError(e.without_url().to_string()))?;

        let status = response.status();
        let response_body = response
            .bytes()
            .await
            .map_err(|e| TranscribeError::DecodeError(e.without_url().to_string()))?;

        debug!(
            "Speech API responded with status {} ({} bytes)",
            status,
            response_body.len()
        );

        TranscriptionResponse::from_slice(&response_body)?.into_transcript()
    }
}

#[async_trait]
impl Transcriber for SpeechClient {
    async fn transcribe(&self, recording_url: &str) -> Result<String, TranscribeError> {
        let audio = self.fetch_audio(recording_url).await?;
        self.fetch_transcription(&audio).await
    }

    fn get_provider_info(&self) -> &'static str {
        "Speech API synchronous recognition"
    }
}

impl std::fmt::Debug for SpeechClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechClient")
            .field("endpoint", &self.endpoint_for_logs)
            .finish()
    }
}
