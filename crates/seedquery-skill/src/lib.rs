//! Voice skill core for SEED queries.
//!
//! Routes already-parsed intents either to the SEED server lookup or to the
//! built-in glossary, and composes the spoken (optionally carded) reply.

pub mod dispatcher;
pub mod error;
pub mod glossary;
pub mod intent;
pub mod lookup;
pub mod response;
pub mod types;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, LookupError, TransportKind};
pub use glossary::explain;
pub use intent::IntentKind;
pub use lookup::{HttpLookupClient, LookupClient, LookupQuery};
pub use response::{tell, ResponseComposer};
pub use types::{Intent, Response, Session};
