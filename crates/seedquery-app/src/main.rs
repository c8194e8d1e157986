//! SEED query binary - composition root.
//!
//! 1. Parse CLI arguments and install tracing
//! 2. Load configuration and apply overrides
//! 3. Build the skill dispatcher and caller allow-list
//! 4. Serve requests over HTTP, or process a single request envelope

mod cli;

use std::io::Read;
use std::path::Path;

use clap::Parser;

use seedquery_api::routes::start_server;
use seedquery_api::{speechlet, AppState};
use seedquery_core::SeedQueryConfig;

use crate::cli::{CliArgs, Command};

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Read a request envelope from a file, or from stdin for `-`.
fn read_request(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        std::fs::read_to_string(path)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    init_tracing(&args.resolve_log_level());

    tracing::info!("Starting SEED query v{}", env!("CARGO_PKG_VERSION"));

    let config_file = args.resolve_config_path();
    let mut config = SeedQueryConfig::load_or_default(&config_file);
    args.apply_overrides(&mut config);
    tracing::info!(
        path = %config_file.display(),
        base_url = %config.lookup.base_url,
        timeout_secs = config.lookup.timeout_secs,
        "Configuration resolved"
    );

    let state = AppState::from_config(&config)?;

    match args.command() {
        Command::Serve => {
            start_server(&config.server, state).await?;
        }
        Command::Invoke { request } => {
            let input = read_request(&request)?;
            let output = speechlet::process_json(&state.dispatcher, &state.verifier, &input).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
