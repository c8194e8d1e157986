//! Caller verification via the application-id allow-list.
//!
//! The voice platform stamps every request with the id of the skill it was
//! issued for. Requests for any other application are refused before they
//! reach the dispatcher.

use std::collections::HashSet;

use crate::envelope::RequestEnvelope;
use crate::error::ApiError;

/// Allow-list of caller application ids.
#[derive(Debug, Clone, Default)]
pub struct ApplicationVerifier {
    allowed: HashSet<String>,
}

impl ApplicationVerifier {
    pub fn new<I, S>(application_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: HashSet<String> = application_ids.into_iter().map(Into::into).collect();
        if allowed.is_empty() {
            tracing::warn!("Application id allow-list is empty; verification disabled");
        }
        Self { allowed }
    }

    pub fn is_enabled(&self) -> bool {
        !self.allowed.is_empty()
    }

    /// Check the envelope's application id against the allow-list.
    pub fn verify(&self, envelope: &RequestEnvelope) -> Result<(), ApiError> {
        if !self.is_enabled() {
            return Ok(());
        }

        match envelope.application_id() {
            Some(id) if self.allowed.contains(id) => Ok(()),
            Some(id) => {
                tracing::warn!(application_id = %id, "Rejected request for unsupported application");
                Err(ApiError::Forbidden(format!(
                    "Unsupported application id: {}",
                    id
                )))
            }
            None => {
                tracing::warn!("Rejected request without application id");
                Err(ApiError::Forbidden(
                    "Missing application id".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope_for(app: Option<&str>) -> RequestEnvelope {
        let mut value = json!({
            "session": { "new": true, "sessionId": "s-1" },
            "request": { "type": "LaunchRequest", "requestId": "r-1" }
        });
        if let Some(app) = app {
            value["session"]["application"] = json!({ "applicationId": app });
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_allowed_application_passes() {
        let verifier = ApplicationVerifier::new(["app-1", "app-2"]);
        assert!(verifier.verify(&envelope_for(Some("app-2"))).is_ok());
    }

    #[test]
    fn test_unknown_application_is_forbidden() {
        let verifier = ApplicationVerifier::new(["app-1"]);
        let err = verifier.verify(&envelope_for(Some("intruder"))).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(msg) if msg.contains("intruder")));
    }

    #[test]
    fn test_missing_application_is_forbidden() {
        let verifier = ApplicationVerifier::new(["app-1"]);
        let err = verifier.verify(&envelope_for(None)).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_empty_allow_list_accepts_everything() {
        let verifier = ApplicationVerifier::new(Vec::<String>::new());
        assert!(!verifier.is_enabled());
        assert!(verifier.verify(&envelope_for(None)).is_ok());
        assert!(verifier.verify(&envelope_for(Some("anything"))).is_ok());
    }
}
