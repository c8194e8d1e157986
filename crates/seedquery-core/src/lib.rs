pub mod config;
pub mod error;

pub use config::SeedQueryConfig;
pub use error::{Result, SeedQueryError};
