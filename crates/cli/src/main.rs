//! evaldash - terminal dashboard for the hackathon evaluation service.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Set up logging and the optional metrics exporter.
//! - Gate every command behind API key login, then run it.
//!
//! Does NOT handle:
//! - REST API implementation or session state (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod interactive;
mod login;

use std::time::Duration;

use args::{Cli, LogFormat};
use clap::Parser;
use commands::AppContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use evaldash_client::{MetricsCollector, MetricsExporter, Session};
use evaldash_config::{ConfigLoader, validate_base_url};
use secrecy::SecretString;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match cli.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    // Initialize metrics exporter if --metrics-bind is provided
    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };
    let metrics = metrics_exporter.as_ref().map(|_| MetricsCollector::new());

    let mut loader = match ConfigLoader::new().from_env() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let prompt_retry = !cli.no_retry_prompt && interactive::stdin_is_terminal();
    let ctx = match AppContext::from_config(&config, metrics, cli.output, prompt_retry) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // The session always starts at the configured default; --base-url only
    // overrides it for this login.
    let mut session = Session::from_config(&config);
    let api_key = cli
        .api_key
        .filter(|key| !key.trim().is_empty())
        .map(|key| SecretString::new(key.into()));
    let base_url = match cli.base_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => match validate_base_url(&url) {
            Ok(url) => Some(url),
            Err(e) => {
                eprintln!("Invalid --base-url: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => None,
    };

    let stdin = std::io::stdin();
    let mut lines = stdin.lock();

    let exit_code = match run_command(
        cli.command,
        &ctx,
        &mut session,
        api_key,
        base_url.as_deref(),
        &mut lines,
    )
    .await
    {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
