//! Core types and value objects for the voice skill.
//!
//! Defines the parsed intent handed over by the voice platform, the opaque
//! session, and the two response shapes the platform understands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Inbound
// =============================================================================

/// An intent recognized by the voice platform: a name plus named slot values.
///
/// Slot values may be absent (`None`) when the platform could not fill them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub slots: HashMap<String, Option<String>>,
}

impl Intent {
    /// Create an intent with no slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    /// Builder-style slot setter.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), Some(value.into()));
        self
    }

    /// Builder-style setter for a slot the platform sent without a value.
    pub fn with_empty_slot(mut self, name: impl Into<String>) -> Self {
        self.slots.insert(name.into(), None);
        self
    }

    /// Value of a slot, treating absent, null and blank values alike.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|v| v.as_deref())
            .filter(|v| !v.trim().is_empty())
    }
}

/// Platform session. Opaque to the skill; only used for log correlation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    /// True on the first request of a session.
    pub is_new: bool,
    pub application_id: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Outbound
// =============================================================================

/// A reply for the voice platform.
///
/// `CardSpeech` carries data-bearing answers (counts, genome facts, term
/// explanations); `PlainSpeech` is used for welcome, help and goodbye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    PlainSpeech {
        text: String,
    },
    CardSpeech {
        text: String,
        card_title: String,
        card_body: String,
    },
}

impl Response {
    /// The text to be spoken.
    pub fn speech(&self) -> &str {
        match self {
            Response::PlainSpeech { text } | Response::CardSpeech { text, .. } => text,
        }
    }

    /// Title and body of the visual card, if any.
    pub fn card(&self) -> Option<(&str, &str)> {
        match self {
            Response::PlainSpeech { .. } => None,
            Response::CardSpeech {
                card_title,
                card_body,
                ..
            } => Some((card_title, card_body)),
        }
    }
}
