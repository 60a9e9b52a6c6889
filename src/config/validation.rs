use tracing::warn;

use super::ServerConfig;
use crate::core::speech::SpeechConfig;

/// Validate the merged configuration.
///
/// An empty speech API key is accepted with a warning: the service answers
/// such requests with a structured error, which the webhook reports as a
/// transcription failure.
pub fn validate(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    validate_port(config.port)?;
    validate_speech_api(&config.speech_config())?;
    validate_rate_limit(
        config.rate_limit_requests_per_second,
        config.rate_limit_burst_size,
    )?;
    Ok(())
}

pub fn validate_port(port: u16) -> Result<(), String> {
    if port == 0 {
        return Err("Server port must be non-zero".to_string());
    }
    Ok(())
}

pub fn validate_speech_api(speech: &SpeechConfig) -> Result<(), String> {
    speech.endpoint_url().map_err(|e| e.to_string())?;

    if speech.api_key.trim().is_empty() {
        warn!(
            "SPEECH_API_KEY is not set; requests to {} will likely be rejected",
            speech.redacted_endpoint()
        );
    }
    Ok(())
}

pub fn validate_rate_limit(rps: u32, burst: u32) -> Result<(), String> {
    if rps == 0 {
        return Err("rate_limit_requests_per_second must be greater than 0".to_string());
    }
    if burst == 0 {
        return Err("rate_limit_burst_size must be greater than 0".to_string());
    }
    Ok(())
}
