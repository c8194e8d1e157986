//! Request processing: envelope in, envelope out.
//!
//! Verifies the caller, fires the session-start hook on the first request of
//! a session, routes the request to the matching dispatcher entry point and
//! wraps the reply in a response envelope.

use tracing::Instrument;

use seedquery_skill::{Dispatcher, Intent};

use crate::auth::ApplicationVerifier;
use crate::envelope::{RequestBody, RequestEnvelope, ResponseEnvelope};
use crate::error::ApiError;

/// Process one parsed request envelope.
pub async fn process(
    dispatcher: &Dispatcher,
    verifier: &ApplicationVerifier,
    envelope: RequestEnvelope,
) -> Result<ResponseEnvelope, ApiError> {
    verifier.verify(&envelope)?;

    let span = tracing::info_span!(
        "request",
        request_id = %envelope.request.request_id(),
        timestamp = ?envelope.request.timestamp()
    );

    async move {
        let session = envelope.to_session();
        if session.is_new {
            dispatcher.on_session_started(&session);
        }

        let reply = match &envelope.request {
            RequestBody::LaunchRequest { .. } => {
                ResponseEnvelope::from(&dispatcher.on_launch(&session))
            }
            RequestBody::IntentRequest { intent, .. } => {
                let intent = Intent::from(intent);
                ResponseEnvelope::from(&dispatcher.handle(&intent, &session).await)
            }
            RequestBody::SessionEndedRequest { reason, .. } => {
                dispatcher.on_session_ended(&session, reason.as_deref());
                ResponseEnvelope::empty()
            }
        };
        Ok(reply)
    }
    .instrument(span)
    .await
}

/// String-in, string-out form of [`process`].
pub async fn process_json(
    dispatcher: &Dispatcher,
    verifier: &ApplicationVerifier,
    input: &str,
) -> Result<String, ApiError> {
    let envelope: RequestEnvelope = serde_json::from_str(input)?;
    let reply = process(dispatcher, verifier, envelope).await?;
    serde_json::to_string(&reply).map_err(|e| ApiError::Internal(e.to_string()))
}
