//! Wire types for the synchronous speech recognition API.
//!
//! Requests are built per call and serialized once. Responses are decoded
//! leniently: every field is optional so that an error-only body and a
//! results-only body share one shape.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};

use super::base::TranscribeError;
use super::config::{AUDIO_ENCODING, SAMPLE_RATE_HZ};

// =============================================================================
// Request
// =============================================================================

/// Recognition request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

/// Audio description sent alongside the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: String,
    pub sample_rate: u32,
}

/// Base64-encoded audio payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionAudio {
    pub content: String,
}

impl TranscriptionRequest {
    /// Build a request for raw LINEAR16 audio at 8 kHz.
    pub fn new(audio: &[u8]) -> Self {
        Self {
            config: RecognitionConfig {
                encoding: AUDIO_ENCODING.to_string(),
                sample_rate: SAMPLE_RATE_HZ,
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(audio),
            },
        }
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> Result<Vec<u8>, TranscribeError> {
        serde_json::to_vec(self).map_err(|e| TranscribeError::EncodeError(e.to_string()))
    }
}

// =============================================================================
// Response
// =============================================================================

/// Read a JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Recognition response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionResponse {
    pub error: Option<ServiceErrorBody>,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<RecognitionResult>,
}

/// Structured error reported by the service. A zero code means no error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceErrorBody {
    #[serde(deserialize_with = "null_as_default")]
    pub code: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionResult {
    #[serde(deserialize_with = "null_as_default")]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alternative {
    #[serde(deserialize_with = "null_as_default")]
    pub transcript: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
}

impl TranscriptionResponse {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, TranscribeError> {
        serde_json::from_slice(body).map_err(|e| TranscribeError::DecodeError(e.to_string()))
    }

    /// Reduce the response to its first transcript.
    ///
    /// A reported error wins over any results present.
    pub fn into_transcript(self) -> Result<String, TranscribeError> {
        if let Some(error) = self.error.filter(|e| e.code != 0) {
            return Err(TranscribeError::ServiceError {
                code: error.code,
                status: error.status,
                message: error.message,
            });
        }

        self.results
            .into_iter()
            .next()
            .and_then(|result| result.alternatives.into_iter().next())
            .map(|alternative| alternative.transcript)
            .ok_or(TranscribeError::NoTranscriptionError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = TranscriptionRequest::new(b"abc");
        let value: serde_json::Value = serde_json::from_slice(&request.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "config": { "encoding": "LINEAR16", "sampleRate": 8000 },
                "audio": { "content": "YWJj" }
            })
        );
    }

    #[test]
    fn test_request_content_decodes_to_original_bytes() {
        let audio: Vec<u8> = (0..=255u8).cycle().take(8001).collect();
        let request = TranscriptionRequest::new(&audio);
        let decoded = STANDARD.decode(&request.audio.content).unwrap();
        assert_eq!(decoded, audio);
    }

    #[test]
    fn test_request_empty_audio() {
        let request = TranscriptionRequest::new(b"");
        assert_eq!(request.audio.content, "");
    }

    #[test]
    fn test_response_first_alternative() {
        let body = json!({
            "results": [
                { "alternatives": [
                    { "transcript": "testing 1 2 3", "confidence": 0.98 },
                    { "transcript": "testing one two three", "confidence": 0.4 }
                ]},
                { "alternatives": [ { "transcript": "later", "confidence": 0.9 } ] }
            ]
        });
        let response = TranscriptionResponse::from_slice(body.to_string().as_bytes()).unwrap();
        assert_eq!(response.into_transcript().unwrap(), "testing 1 2 3");
    }

    #[test]
    fn test_response_transcript_not_trimmed() {
        let body = r#"{"results":[{"alternatives":[{"transcript":" Testing 1 2 3 "}]}]}"#;
        let response = TranscriptionResponse::from_slice(body.as_bytes()).unwrap();
        assert_eq!(response.into_transcript().unwrap(), " Testing 1 2 3 ");
    }

    #[test]
    fn test_response_empty_results() {
        let response = TranscriptionResponse::from_slice(br#"{"results":[]}"#).unwrap();
        assert_eq!(
            response.into_transcript(),
            Err(TranscribeError::NoTranscriptionError)
        );
    }

    #[test]
    fn test_response_empty_body_object() {
        let response = TranscriptionResponse::from_slice(b"{}").unwrap();
        assert_eq!(
            response.into_transcript(),
            Err(TranscribeError::NoTranscriptionError)
        );
    }

    #[test]
    fn test_response_empty_alternatives() {
        let response =
            TranscriptionResponse::from_slice(br#"{"results":[{"alternatives":[]}]}"#).unwrap();
        assert_eq!(
            response.into_transcript(),
            Err(TranscribeError::NoTranscriptionError)
        );
    }

    #[test]
    fn test_response_error_wins_over_results() {
        let body = json!({
            "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" },
            "results": [ { "alternatives": [ { "transcript": "testing 1 2 3" } ] } ]
        });
        let response = TranscriptionResponse::from_slice(body.to_string().as_bytes()).unwrap();
        assert_eq!(
            response.into_transcript(),
            Err(TranscribeError::ServiceError {
                code: 403,
                status: "PERMISSION_DENIED".to_string(),
                message: "API key not valid".to_string(),
            })
        );
    }

    #[test]
    fn test_response_zero_error_code_is_success() {
        let body = r#"{"error":{"code":0},"results":[{"alternatives":[{"transcript":"hi"}]}]}"#;
        let response = TranscriptionResponse::from_slice(body.as_bytes()).unwrap();
        assert_eq!(response.into_transcript().unwrap(), "hi");
    }

    #[test]
    fn test_response_null_error() {
        let body = r#"{"error":null,"results":[{"alternatives":[{"transcript":"hi"}]}]}"#;
        let response = TranscriptionResponse::from_slice(body.as_bytes()).unwrap();
        assert_eq!(response.into_transcript().unwrap(), "hi");
    }

    #[test]
    fn test_response_null_transcript_is_empty() {
        let body = r#"{"results":[{"alternatives":[{"transcript":null,"confidence":null}]}]}"#;
        let response = TranscriptionResponse::from_slice(body.as_bytes()).unwrap();
        assert_eq!(response.into_transcript().unwrap(), "");
    }

    #[test]
    fn test_response_null_results() {
        let response = TranscriptionResponse::from_slice(br#"{"results":null}"#).unwrap();
        assert_eq!(
            response.into_transcript(),
            Err(TranscribeError::NoTranscriptionError)
        );

        let response =
            TranscriptionResponse::from_slice(br#"{"results":[{"alternatives":null}]}"#).unwrap();
        assert_eq!(
            response.into_transcript(),
            Err(TranscribeError::NoTranscriptionError)
        );
    }

    #[test]
    fn test_response_error_with_null_fields() {
        let body = r#"{"error":{"code":500,"message":null,"status":null}}"#;
        let response = TranscriptionResponse::from_slice(body.as_bytes()).unwrap();
        assert_eq!(
            response.into_transcript(),
            Err(TranscribeError::ServiceError {
                code: 500,
                status: String::new(),
                message: String::new(),
            })
        );
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let body = r#"{"results":[{"alternatives":[{"transcript":"hi","words":[]}],"languageCode":"en-us"}]}"#;
        assert!(TranscriptionResponse::from_slice(body.as_bytes()).is_ok());
    }

    #[test]
    fn test_response_malformed() {
        assert!(matches!(
            TranscriptionResponse::from_slice(b"<html>502</html>"),
            Err(TranscribeError::DecodeError(_))
        ));
        assert!(matches!(
            TranscriptionResponse::from_slice(br#"{"results":"nope"}"#),
            Err(TranscribeError::DecodeError(_))
        ));
    }
}
