//! SEED query API crate - voice platform request adapter over axum.
//!
//! Accepts the platform's JSON request envelope, checks the calling
//! application against the allow-list, hands the request to the skill
//! dispatcher and returns the JSON response envelope.

pub mod auth;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod speechlet;
pub mod state;

pub use auth::ApplicationVerifier;
pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
