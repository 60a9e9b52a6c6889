pub mod speech;
pub mod twiml;

// Re-export public types and traits
pub use speech::{SpeechClient, SpeechConfig, TranscribeError, Transcriber};
pub use twiml::{PASSPHRASE, ResponseDocument, is_passphrase};
