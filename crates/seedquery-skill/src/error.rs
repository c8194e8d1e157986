//! Error types for the voice skill.
//!
//! None of these reach the voice channel as errors: the lookup client turns
//! `LookupError` into spoken text, and `DispatchError` carries its own spoken
//! fallback.

use std::fmt;

use crate::types::Response;

/// Spoken reply when a required slot is absent or blank.
pub const MISSING_SLOT_SPEECH: &str = "I am sorry, but I didn't understand your request.";

/// Spoken reply when the intent name is not in the routing table.
pub const UNRECOGNIZED_INTENT_SPEECH: &str = "I'm not sure how to help with that.";

/// Coarse classification of a transport failure, spoken back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connection,
    Request,
    Body,
    Decode,
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Timeout => write!(f, "timeout"),
            TransportKind::Connection => write!(f, "connection"),
            TransportKind::Request => write!(f, "request"),
            TransportKind::Body => write!(f, "body"),
            TransportKind::Decode => write!(f, "decode"),
            TransportKind::Other => write!(f, "other"),
        }
    }
}

impl From<&reqwest::Error> for TransportKind {
    fn from(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connection
        } else if err.is_body() {
            TransportKind::Body
        } else if err.is_decode() {
            TransportKind::Decode
        } else if err.is_request() || err.is_builder() {
            TransportKind::Request
        } else {
            TransportKind::Other
        }
    }
}

/// Failures of a single SEED server lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Fatal internet error {0}")]
    HttpStatus(u16),
    #[error("A fatal error of type {kind} occurred.")]
    Transport { kind: TransportKind, message: String },
    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport {
            kind: TransportKind::from(&err),
            message: err.to_string(),
        }
    }
}

/// Failures of intent dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Unrecognized intent: {0}")]
    UnrecognizedIntent(String),
    #[error("Intent {intent} is missing required slot {slot}")]
    MissingSlot {
        intent: &'static str,
        slot: &'static str,
    },
}

impl DispatchError {
    /// The spoken reply that stands in for this failure.
    pub fn fallback_response(&self) -> Response {
        let text = match self {
            DispatchError::UnrecognizedIntent(_) => UNRECOGNIZED_INTENT_SPEECH,
            DispatchError::MissingSlot { .. } => MISSING_SLOT_SPEECH,
        };
        Response::PlainSpeech {
            text: text.to_string(),
        }
    }
}
