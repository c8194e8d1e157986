use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SeedQueryError};

/// Legacy CGI endpoint of the SEED server. The query encoding it expects is
/// fixed, so only the location is configurable.
pub const DEFAULT_BASE_URL: &str = "http://bioseed.mcs.anl.gov/~parrello/SEEDtk/svr.cgi";

/// Application id of the published skill.
pub const DEFAULT_APPLICATION_ID: &str =
    "amzn1.echo-sdk-ams.app.d32becb3-600b-49d2-96ed-8cc2e7734ca8";

/// Top-level configuration for the SEED query service.
///
/// Loaded from `~/.seedquery/config.toml` by default. Every section is
/// optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedQueryConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub skill: SkillConfig,
}

impl SeedQueryConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SeedQueryConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SeedQueryError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// HTTP listener settings for the request adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Listening port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

/// Remote lookup client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the SEED query script; `?action=..;parameter=..` is appended.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 5,
        }
    }
}

/// Voice skill settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Title shown on every visual card.
    pub card_title: String,
    /// Caller application ids allowed to invoke the skill. Empty disables the check.
    pub application_ids: Vec<String>,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            card_title: "SEED Information".to_string(),
            application_ids: vec![DEFAULT_APPLICATION_ID.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = SeedQueryConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3030);
        assert_eq!(config.lookup.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.lookup.timeout_secs, 5);
        assert_eq!(config.skill.card_title, "SEED Information");
        assert_eq!(config.skill.application_ids, vec![DEFAULT_APPLICATION_ID]);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[server]
host = "0.0.0.0"
port = 8080

[lookup]
base_url = "http://localhost:9000/svr.cgi"
timeout_secs = 2

[skill]
card_title = "SEED Test"
application_ids = ["app-one", "app-two"]
"#;
        let file = create_temp_config(content);
        let config = SeedQueryConfig::load(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.lookup.base_url, "http://localhost:9000/svr.cgi");
        assert_eq!(config.lookup.timeout_secs, 2);
        assert_eq!(config.skill.card_title, "SEED Test");
        assert_eq!(config.skill.application_ids, vec!["app-one", "app-two"]);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[lookup]
timeout_secs = 10
"#;
        let file = create_temp_config(content);
        let config = SeedQueryConfig::load(file.path()).unwrap();
        assert_eq!(config.lookup.timeout_secs, 10);
        assert_eq!(config.lookup.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.port, 3030);
        assert_eq!(config.skill.card_title, "SEED Information");
    }

    #[test]
    fn test_empty_application_ids_is_preserved() {
        let file = create_temp_config("[skill]\napplication_ids = []\n");
        let config = SeedQueryConfig::load(file.path()).unwrap();
        assert!(config.skill.application_ids.is_empty());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SeedQueryConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.lookup.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = SeedQueryConfig::load(file.path());
        assert!(matches!(result, Err(SeedQueryError::Config(_))));
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = SeedQueryConfig::default();
        config.server.port = 4040;
        config.skill.application_ids.push("second-app".to_string());
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = SeedQueryConfig::load(&path).unwrap();
        assert_eq!(reloaded.server.port, 4040);
        assert_eq!(reloaded.skill.application_ids.len(), 2);
        assert_eq!(reloaded.lookup.timeout_secs, config.lookup.timeout_secs);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = SeedQueryConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 3030);
        assert_eq!(config.lookup.timeout_secs, 5);
        assert_eq!(config.skill.card_title, "SEED Information");
    }
}
