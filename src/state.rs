use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::core::speech::{SpeechClient, TranscribeError, Transcriber};

/// Shared, read-only application state.
///
/// Handlers only read from it; nothing here is mutated after startup.
pub struct AppState {
    pub config: ServerConfig,
    pub transcriber: Arc<dyn Transcriber>,
}

impl AppState {
    /// Build state with the HTTP-backed speech client for `config`.
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, TranscribeError> {
        let speech_config = config.speech_config();
        let client = SpeechClient::new(&speech_config)?;

        info!(
            "Using {} at {}",
            client.get_provider_info(),
            speech_config.redacted_endpoint()
        );

        Ok(Self::with_transcriber(config, Arc::new(client)))
    }

    /// Build state around any transcriber.
    pub fn with_transcriber(config: ServerConfig, transcriber: Arc<dyn Transcriber>) -> Arc<Self> {
        Arc::new(Self {
            config,
            transcriber,
        })
    }
}
