//! Fixed TwiML documents returned to the telephony platform.
//!
//! The platform renders `<Say>` with its own text-to-speech and performs
//! `<Record>` itself, posting the resulting `RecordingUrl` back to the webhook.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Phrase the caller has to say. Compared byte for byte with the transcript.
pub const PASSPHRASE: &str = "testing 1 2 3";

/// Content type of every document.
pub const TWIML_CONTENT_TYPE: &str = "text/xml";

const GREETING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
	<Say>Hello, human. What is the password?</Say>
	<Record timeout="5" />
</Response>"#;

const REJECTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
	<Say>No no no! That is not the password. I will now report you to Santa Claus.</Say>
</Response>"#;

const ACCEPTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
	<Say>Yes, testing 1 2 3 is the password. I would now execute an arbitrary function or functions.</Say>
</Response>"#;

/// One of the three voice responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDocument {
    /// Ask for the password and record up to five seconds.
    Greeting,
    /// The transcript did not match.
    Rejected,
    /// The transcript matched.
    Accepted,
}

impl ResponseDocument {
    /// Pick the outcome document for a transcript.
    pub fn for_transcript(transcript: &str) -> Self {
        if is_passphrase(transcript) {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }

    /// Raw TwiML body.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => GREETING,
            Self::Rejected => REJECTED,
            Self::Accepted => ACCEPTED,
        }
    }
}

impl std::fmt::Display for ResponseDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greeting => write!(f, "greeting"),
            Self::Rejected => write!(f, "rejected"),
            Self::Accepted => write!(f, "accepted"),
        }
    }
}

impl IntoResponse for ResponseDocument {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static(TWIML_CONTENT_TYPE),
            )],
            self.as_str(),
        )
            .into_response()
    }
}

/// Exact comparison: no case folding, trimming or punctuation handling.
#[inline]
pub fn is_passphrase(transcript: &str) -> bool {
    transcript == PASSPHRASE
}
