//! Voice platform JSON envelopes.
//!
//! Wire shapes of the request the platform posts and the response it expects
//! back, plus conversions to and from the skill's own types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seedquery_skill::{Intent, Response, Session};

pub const ENVELOPE_VERSION: &str = "1.0";

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextBody>,
    pub request: RequestBody,
}

impl RequestEnvelope {
    /// Calling application id: the session's, else the context's.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .or_else(|| {
                self.context
                    .as_ref()
                    .and_then(|c| c.system.as_ref())
                    .and_then(|s| s.application.as_ref())
            })
            .map(|a| a.application_id.as_str())
    }

    /// Session as seen by the skill. Requests without a session get an empty one.
    pub fn to_session(&self) -> Session {
        match &self.session {
            Some(body) => Session {
                session_id: body.session_id.clone(),
                is_new: body.is_new,
                application_id: self.application_id().map(str::to_string),
                user_id: body.user.as_ref().map(|u| u.user_id.clone()),
            },
            None => Session {
                application_id: self.application_id().map(str::to_string),
                ..Session::default()
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBody {
    #[serde(rename = "new", default)]
    pub is_new: bool,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationBody {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextBody {
    #[serde(rename = "System", default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationBody>,
}

/// The three request types the skill answers, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    #[serde(rename_all = "camelCase")]
    LaunchRequest {
        request_id: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
    #[serde(rename_all = "camelCase")]
    IntentRequest {
        request_id: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
        intent: IntentBody,
    },
    #[serde(rename_all = "camelCase")]
    SessionEndedRequest {
        request_id: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
        #[serde(default)]
        reason: Option<String>,
    },
}

impl RequestBody {
    pub fn request_id(&self) -> &str {
        match self {
            RequestBody::LaunchRequest { request_id, .. }
            | RequestBody::IntentRequest { request_id, .. }
            | RequestBody::SessionEndedRequest { request_id, .. } => request_id,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            RequestBody::LaunchRequest { timestamp, .. }
            | RequestBody::IntentRequest { timestamp, .. }
            | RequestBody::SessionEndedRequest { timestamp, .. } => *timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentBody {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotBody {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl From<&IntentBody> for Intent {
    fn from(body: &IntentBody) -> Self {
        Intent {
            name: body.name.clone(),
            slots: body
                .slots
                .iter()
                .map(|(key, slot)| (key.clone(), slot.value.clone()))
                .collect(),
        }
    }
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
}

impl ResponseEnvelope {
    /// Envelope with nothing to say, used to acknowledge session end.
    pub fn empty() -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: ResponseBody::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

/// Both skill responses are "tell" responses: they end the session.
impl From<&Response> for ResponseEnvelope {
    fn from(response: &Response) -> Self {
        let card = response.card().map(|(title, content)| Card {
            card_type: "Simple".to_string(),
            title: title.to_string(),
            content: content.to_string(),
        });

        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech {
                    speech_type: "PlainText".to_string(),
                    text: response.speech().to_string(),
                }),
                card,
                should_end_session: Some(true),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn intent_envelope() -> serde_json::Value {
        json!({
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "SessionId.1",
                "application": { "applicationId": "app-1" },
                "user": { "userId": "user-1" }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "EdwRequestId.1",
                "timestamp": "2016-04-12T03:20:53Z",
                "locale": "en-US",
                "intent": {
                    "name": "GenomeIntent",
                    "slots": {
                        "TaxonId": { "name": "TaxonId", "value": "83333" },
                        "Version": { "name": "Version" }
                    }
                }
            }
        })
    }

    #[test]
    fn test_parse_intent_request() {
        let envelope: RequestEnvelope = serde_json::from_value(intent_envelope()).unwrap();
        assert_eq!(envelope.request.request_id(), "EdwRequestId.1");
        assert!(envelope.request.timestamp().is_some());
        assert_eq!(envelope.application_id(), Some("app-1"));

        let session = envelope.to_session();
        assert_eq!(session.session_id, "SessionId.1");
        assert!(session.is_new);
        assert_eq!(session.user_id.as_deref(), Some("user-1"));

        let RequestBody::IntentRequest { intent, .. } = &envelope.request else {
            panic!("expected IntentRequest");
        };
        let intent = Intent::from(intent);
        assert_eq!(intent.name, "GenomeIntent");
        assert_eq!(intent.slot("TaxonId"), Some("83333"));
        assert_eq!(intent.slots.get("Version"), Some(&None));
    }

    #[test]
    fn test_application_id_falls_back_to_context() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "context": { "System": { "application": { "applicationId": "ctx-app" } } },
            "request": { "type": "LaunchRequest", "requestId": "r-1" }
        }))
        .unwrap();
        assert_eq!(envelope.application_id(), Some("ctx-app"));
        let session = envelope.to_session();
        assert_eq!(session.session_id, "");
        assert_eq!(session.application_id.as_deref(), Some("ctx-app"));
    }

    #[test]
    fn test_parse_session_ended_with_reason() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "session": { "new": false, "sessionId": "s-1" },
            "request": {
                "type": "SessionEndedRequest",
                "requestId": "r-2",
                "reason": "USER_INITIATED"
            }
        }))
        .unwrap();
        assert!(matches!(
            envelope.request,
            RequestBody::SessionEndedRequest { ref reason, .. } if reason.as_deref() == Some("USER_INITIATED")
        ));
        assert_eq!(envelope.application_id(), None);
    }

    #[test]
    fn test_unknown_request_type_is_rejected() {
        let result = serde_json::from_value::<RequestEnvelope>(json!({
            "request": { "type": "AudioPlayer.PlaybackStarted", "requestId": "r-3" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_card_response_envelope() {
        let response = Response::CardSpeech {
            text: "42".to_string(),
            card_title: "SEED Information".to_string(),
            card_body: "42".to_string(),
        };
        let value = serde_json::to_value(ResponseEnvelope::from(&response)).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "response": {
                    "outputSpeech": { "type": "PlainText", "text": "42" },
                    "card": { "type": "Simple", "title": "SEED Information", "content": "42" },
                    "shouldEndSession": true
                }
            })
        );
    }

    #[test]
    fn test_plain_response_envelope_has_no_card() {
        let response = Response::PlainSpeech {
            text: "Goodbye".to_string(),
        };
        let value = serde_json::to_value(ResponseEnvelope::from(&response)).unwrap();
        assert_eq!(value["response"]["outputSpeech"]["text"], "Goodbye");
        assert!(value["response"].get("card").is_none());
    }

    #[test]
    fn test_empty_envelope() {
        let value = serde_json::to_value(ResponseEnvelope::empty()).unwrap();
        assert_eq!(value, json!({ "version": "1.0", "response": {} }));
    }
}
