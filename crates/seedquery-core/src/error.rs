use thiserror::Error;

/// Top-level error type for the SEED query service.
///
/// Skill-level failures (unknown intents, missing slots, upstream lookup
/// failures) never surface here: they are converted to spoken text inside the
/// skill crate. This type covers the process plumbing around it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedQueryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("API error: {0}")]
    Api(String),
}

impl From<toml::de::Error> for SeedQueryError {
    fn from(err: toml::de::Error) -> Self {
        SeedQueryError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SeedQueryError {
    fn from(err: toml::ser::Error) -> Self {
        SeedQueryError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SeedQueryError {
    fn from(err: serde_json::Error) -> Self {
        SeedQueryError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for SEED query operations.
pub type Result<T> = std::result::Result<T, SeedQueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeedQueryError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = SeedQueryError::Api("bind failed".to_string());
        assert_eq!(err.to_string(), "API error: bind failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SeedQueryError = io_err.into();
        assert!(matches!(err, SeedQueryError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: SeedQueryError = toml_err.into();
        assert!(matches!(err, SeedQueryError::Config(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: SeedQueryError = json_err.into();
        assert!(matches!(err, SeedQueryError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error: "));
    }
}
