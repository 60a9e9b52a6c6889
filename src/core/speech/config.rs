//! Configuration types for the synchronous speech recognition API.
//!
//! The request shape is fixed: telephony recordings arrive as 8 kHz 16-bit
//! PCM, so encoding and sample rate are constants rather than settings. Only
//! the endpoint and the API key vary between deployments.

use url::Url;
use zeroize::Zeroize;

use super::base::TranscribeError;

// =============================================================================
// Constants
// =============================================================================

/// Default synchronous recognition endpoint (without the key parameter).
pub const DEFAULT_SPEECH_API_URL: &str =
    "https://speech.googleapis.com/v1beta1/speech:syncrecognize";

/// Audio encoding sent with every recognition request.
pub const AUDIO_ENCODING: &str = "LINEAR16";

/// Sample rate of telephony recordings in Hz.
pub const SAMPLE_RATE_HZ: u32 = 8000;

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "key";

// =============================================================================
// Speech Config
// =============================================================================

/// Endpoint and credentials for the speech service.
#[derive(Clone)]
pub struct SpeechConfig {
    /// Base endpoint URL, without the key parameter.
    pub api_url: String,
    /// API key appended as `?key=` to every request.
    pub api_key: String,
}

impl SpeechConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build the full endpoint URL with the API key embedded.
    ///
    /// Existing query parameters on `api_url` are preserved.
    pub fn endpoint_url(&self) -> Result<Url, TranscribeError> {
        let mut url = Url::parse(&self.api_url).map_err(|e| {
            TranscribeError::ConfigurationError(format!(
                "Invalid speech API URL '{}': {e}",
                self.api_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(TranscribeError::ConfigurationError(format!(
                "Speech API URL must use http or https, got: {}",
                url.scheme()
            )));
        }

        url.query_pairs_mut().append_pair(API_KEY_PARAM, &self.api_key);
        Ok(url)
    }

    /// Endpoint suitable for logs: scheme, host and path only.
    pub fn redacted_endpoint(&self) -> String {
        match Url::parse(&self.api_url) {
            Ok(url) => format!(
                "{}://{}{}",
                url.scheme(),
                url.host_str().unwrap_or_default(),
                url.path()
            ),
            Err(_) => "<invalid>".to_string(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SPEECH_API_URL, String::new())
    }
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Drop for SpeechConfig {
    fn drop(&mut self) {
        self.api_key.zeroize();
    }
}
