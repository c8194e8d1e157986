//! Intent dispatcher.
//!
//! Routes a parsed intent to the SEED server lookup or the glossary, checks
//! the slots each intent requires, and picks the response shape. Stateless
//! per call: the session is only used for log correlation.

use std::sync::Arc;

use seedquery_core::SeedQueryConfig;
use tracing::Instrument;

use crate::error::{DispatchError, LookupError};
use crate::glossary;
use crate::intent::IntentKind;
use crate::lookup::{HttpLookupClient, LookupClient};
use crate::response::ResponseComposer;
use crate::types::{Intent, Response, Session};

pub const WELCOME_SPEECH: &str = "Welcome to SEED.";

pub const HELP_SPEECH: &str = "To get genome data, use the genome ID, for example 'ask the SEED about 83333.1'. \
    To get counts, use the table name, for example 'ask the SEED how many genomes'.";

pub const GOODBYE_SPEECH: &str = "Goodbye";

/// Dispatcher for the four platform entry points.
pub struct Dispatcher {
    lookup: Arc<dyn LookupClient>,
    composer: ResponseComposer,
    span: tracing::Span,
}

impl Dispatcher {
    /// Create a dispatcher. Every call runs inside `span`.
    pub fn new(
        lookup: Arc<dyn LookupClient>,
        composer: ResponseComposer,
        span: tracing::Span,
    ) -> Self {
        Self {
            lookup,
            composer,
            span,
        }
    }

    /// Dispatcher talking to the configured SEED server.
    pub fn from_config(config: &SeedQueryConfig) -> Result<Self, LookupError> {
        let lookup = HttpLookupClient::from_config(&config.lookup)?;
        let span = tracing::info_span!("skill", base_url = %lookup.base_url());
        Ok(Self::new(
            Arc::new(lookup),
            ResponseComposer::new(config.skill.card_title.clone()),
            span,
        ))
    }

    pub fn on_session_started(&self, session: &Session) {
        let _enter = self.span.enter();
        tracing::info!(session_id = %session.session_id, "onSessionStarted");
    }

    pub fn on_launch(&self, session: &Session) -> Response {
        let _enter = self.span.enter();
        tracing::info!(session_id = %session.session_id, "onLaunch");
        self.composer.plain(WELCOME_SPEECH)
    }

    pub fn on_session_ended(&self, session: &Session, reason: Option<&str>) {
        let _enter = self.span.enter();
        tracing::info!(session_id = %session.session_id, reason = ?reason, "onSessionEnded");
    }

    /// Handle an intent, converting any dispatch failure into its spoken fallback.
    pub async fn handle(&self, intent: &Intent, session: &Session) -> Response {
        async {
            tracing::info!(session_id = %session.session_id, intent = %intent.name, "onIntent");
            match self.dispatch(intent).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!(intent = %intent.name, error = %err, "Intent not handled, speaking fallback");
                    err.fallback_response()
                }
            }
        }
        .instrument(self.span.clone())
        .await
    }

    /// Route an intent. Unknown names and missing slots come back as errors.
    pub async fn dispatch(&self, intent: &Intent) -> Result<Response, DispatchError> {
        let kind: IntentKind = intent.name.parse()?;

        match kind {
            IntentKind::Count => {
                let object_type = require(kind, intent, "ObjectType")?;
                tracing::info!(object = %object_type, "count intent");
                Ok(self.seed_data(kind, object_type).await)
            }
            IntentKind::Genome => {
                let taxon_id = require(kind, intent, "TaxonId")?;
                let version = require(kind, intent, "Version")?;
                let genome_id = format!("{}.{}", taxon_id, version);
                tracing::info!(genome = %genome_id, "genome intent");
                Ok(self.seed_data(kind, &genome_id).await)
            }
            IntentKind::Text => {
                let term = require(kind, intent, "Term")?;
                tracing::info!(term = %term, "term intent");
                Ok(self.composer.card(glossary::explain(Some(term))))
            }
            IntentKind::Help => Ok(self.composer.plain(HELP_SPEECH)),
            IntentKind::Cancel | IntentKind::Stop => Ok(self.composer.plain(GOODBYE_SPEECH)),
        }
    }

    async fn seed_data(&self, kind: IntentKind, parameter: &str) -> Response {
        let text = self.lookup.fetch(kind.name(), parameter).await;
        self.composer.card(text)
    }
}

/// Non-blank value of a slot the intent declares as required.
fn require<'a>(
    kind: IntentKind,
    intent: &'a Intent,
    slot: &'static str,
) -> Result<&'a str, DispatchError> {
    debug_assert!(kind.required_slots().contains(&slot));
    intent.slot(slot).ok_or(DispatchError::MissingSlot {
        intent: kind.name(),
        slot,
    })
}
