//! Speech-to-text over the synchronous recognition REST API.
//!
//! # Request
//!
//! ```json
//! {
//!   "config": { "encoding": "LINEAR16", "sampleRate": 8000 },
//!   "audio": { "content": "<base64 audio>" }
//! }
//! ```
//!
//! posted to `<api_url>?key=<API_KEY>`.
//!
//! # Response
//!
//! ```json
//! {
//!   "error": { "code": 0, "message": "", "status": "" },
//!   "results": [ { "alternatives": [ { "transcript": "...", "confidence": 0.9 } ] } ]
//! }
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use voicegate::core::speech::{SpeechClient, SpeechConfig, Transcriber};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SpeechConfig::new(
//!     "https://speech.googleapis.com/v1beta1/speech:syncrecognize",
//!     "api-key",
//! );
//! let client = SpeechClient::new(&config)?;
//! let text = client.transcribe("https://media.example.com/recording.wav").await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

mod base;
mod client;
mod config;
mod messages;


pub use base::{TranscribeError, Transcriber};
pub use client::SpeechClient;
pub use config::{AUDIO_ENCODING, DEFAULT_SPEECH_API_URL, SAMPLE_RATE_HZ, SpeechConfig};
pub use messages::{
    Alternative, RecognitionAudio, RecognitionConfig, RecognitionResult, ServiceErrorBody,
    TranscriptionRequest, TranscriptionResponse,
};
