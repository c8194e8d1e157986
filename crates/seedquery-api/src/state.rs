//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use seedquery_core::{SeedQueryConfig, SeedQueryError};
use seedquery_skill::Dispatcher;

use crate::auth::ApplicationVerifier;

/// Shared application state. Nothing in it is mutable.
#[derive(Clone)]
pub struct AppState {
    /// Skill dispatcher.
    pub dispatcher: Arc<Dispatcher>,
    /// Caller allow-list.
    pub verifier: Arc<ApplicationVerifier>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, verifier: ApplicationVerifier) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            verifier: Arc::new(verifier),
            start_time: Instant::now(),
        }
    }

    /// Build the dispatcher and verifier from configuration.
    pub fn from_config(config: &SeedQueryConfig) -> Result<Self, SeedQueryError> {
        let dispatcher =
            Dispatcher::from_config(config).map_err(|e| SeedQueryError::Config(e.to_string()))?;
        let verifier = ApplicationVerifier::new(config.skill.application_ids.iter().cloned());
        Ok(Self::new(dispatcher, verifier))
    }
}
