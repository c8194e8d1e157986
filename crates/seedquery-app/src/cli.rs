//! CLI argument definitions for the SEED query service.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use seedquery_core::SeedQueryConfig;

/// SEED query - voice skill answering genome questions from the SEED server.
#[derive(Parser, Debug)]
#[command(name = "seedquery", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Base URL of the SEED query script.
    #[arg(short = 'u', long = "base-url")]
    pub base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Serve voice platform requests over HTTP (default).
    #[default]
    Serve,
    /// Process one request envelope and print the response envelope.
    Invoke {
        /// JSON request file, or `-` for stdin.
        request: PathBuf,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SEEDQUERY_CONFIG env var > ~/.seedquery/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SEEDQUERY_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > SEEDQUERY_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("SEEDQUERY_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the SEED server base URL.
    ///
    /// Priority: --base-url flag > SEEDQUERY_BASE_URL env var > config file value.
    pub fn resolve_base_url(&self, config_url: &str) -> String {
        if let Some(ref url) = self.base_url {
            return url.clone();
        }
        if let Ok(url) = std::env::var("SEEDQUERY_BASE_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        config_url.to_string()
    }

    pub fn resolve_log_level(&self) -> String {
        self.log_level.clone().unwrap_or_else(|| "info".to_string())
    }

    /// Fold CLI and environment overrides into a loaded configuration.
    pub fn apply_overrides(&self, config: &mut SeedQueryConfig) {
        config.server.port = self.resolve_port(config.server.port);
        config.lookup.base_url = self.resolve_base_url(&config.lookup.base_url);
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".seedquery").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".seedquery").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_serve() {
        let args = CliArgs::try_parse_from(["seedquery"]).unwrap();
        assert_eq!(args.command(), Command::Serve);
        assert_eq!(args.resolve_log_level(), "info");
    }

    #[test]
    fn test_invoke_command() {
        let args = CliArgs::try_parse_from(["seedquery", "invoke", "genometest.json"]).unwrap();
        assert_eq!(
            args.command(),
            Command::Invoke {
                request: PathBuf::from("genometest.json")
            }
        );
    }

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::try_parse_from([
            "seedquery",
            "--config",
            "/tmp/seed.toml",
            "--port",
            "9090",
            "--base-url",
            "http://localhost:8000/svr.cgi",
            "--log-level",
            "debug",
            "serve",
        ])
        .unwrap();

        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/seed.toml"));
        assert_eq!(args.resolve_log_level(), "debug");

        let mut config = SeedQueryConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.lookup.base_url, "http://localhost:8000/svr.cgi");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(CliArgs::try_parse_from(["seedquery", "--port", "99999"]).is_err());
    }
}
