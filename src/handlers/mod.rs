//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `voice` - Telephony webhook (greeting, transcription, passphrase check)

pub mod api;
pub mod voice;

pub use voice::voice_webhook;
