use axum::{
    Form,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::core::twiml::ResponseDocument;
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;

/// Form field carrying the recording location.
pub const RECORDING_URL_FIELD: &str = "RecordingUrl";

/// Parsed telephony callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackRequest {
    /// Recording to transcribe; `None` until the caller has recorded.
    pub recording_url: Option<String>,
    /// Every posted field, kept for diagnostics only.
    pub fields: HashMap<String, String>,
}

impl CallbackRequest {
    /// An empty `RecordingUrl` counts as absent.
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let recording_url = fields
            .get(RECORDING_URL_FIELD)
            .filter(|url| !url.is_empty())
            .cloned();

        Self {
            recording_url,
            fields,
        }
    }

    /// Merge query-string fields under body fields. A body value wins over a
    /// query value with the same name.
    pub fn from_parts(query: HashMap<String, String>, body: HashMap<String, String>) -> Self {
        let mut fields = query;
        fields.extend(body);
        Self::from_fields(fields)
    }
}

/// Telephony webhook.
///
/// Fields are read from the query string and the form body, as the provider
/// may send either. Without a recording the caller is greeted and asked to
/// record. With one, the recording is transcribed on its own task and the
/// transcript is checked against the passphrase.
pub async fn voice_webhook(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> AppResult<ResponseDocument> {
    let query = match query {
        Ok(Query(fields)) => fields,
        Err(rejection) => {
            debug!("Ignoring unparseable query string: {}", rejection);
            HashMap::new()
        }
    };
    let body = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            debug!("Treating unparseable callback body as empty: {}", rejection);
            HashMap::new()
        }
    };

    let callback = CallbackRequest::from_parts(query, body);

    let Some(recording_url) = callback.recording_url else {
        info!("No recording yet, sending greeting");
        return Ok(ResponseDocument::Greeting);
    };

    for (key, value) in &callback.fields {
        info!("{}: {}", key, value);
    }

    let transcriber = state.transcriber.clone();
    let task = tokio::spawn(async move { transcriber.transcribe(&recording_url).await });

    let transcript = match task.await {
        Ok(Ok(transcript)) => transcript,
        Ok(Err(e)) => {
            let err = AppError::from(e);
            error!("{}", err);
            return Err(err);
        }
        Err(join_error) => {
            let err = AppError::TaskFailed(join_error.to_string());
            error!("{}", err);
            return Err(err);
        }
    };

    let document = ResponseDocument::for_transcript(&transcript);
    info!("Transcript {:?} -> {}", transcript, document);
    Ok(document)
}
