//! CLI entry point for the edge function probe.
//!
//! Fires exactly one POST at the configured endpoint and prints the raw
//! outcome. A failed probe is still a successful run: the failure is part of
//! the report, not of the exit status.

use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use edge_probe::config::ProbeSettings;
use edge_probe::fetch::{BasicClient, auth::Bearer};
use edge_probe::probe::{ProbeOutcome, run_probe};
use edge_probe::report;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "edge_probe")]
#[command(about = "Fire one POST at an edge function and print what came back", long_about = None)]
struct Cli {
    /// Endpoint to probe (default: the built-in function URL)
    #[arg(long)]
    url: Option<String>,

    /// Bearer token to send (default: the built-in anon key)
    #[arg(long)]
    token: Option<String>,

    /// Seconds to wait for the full round trip
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the outcome as pretty JSON instead of the line report
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr, plus a JSON rolling log file when
    // LOG_FILE_PATH is set. Stdout stays reserved for the report.
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let mut _file_guard = None;
    let json_layer = if let Ok(log_file_path) = std::env::var("LOG_FILE_PATH") {
        let log_dir = Path::new(&log_file_path)
            .parent()
            .unwrap_or(Path::new("logs"));
        let log_file_name = Path::new(&log_file_path)
            .file_name()
            .unwrap_or(OsStr::new("edge_probe.log"));

        let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        _file_guard = Some(guard);

        Some(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()),
                ),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut settings = ProbeSettings::from_env()?;
    if let Some(url) = cli.url {
        settings.url = url;
    }
    if let Some(token) = cli.token {
        settings.bearer_token = token;
    }
    if let Some(secs) = cli.timeout_secs {
        settings.timeout = Duration::from_secs(secs);
    }

    let client = Bearer::new(BasicClient::new(settings.timeout)?, &settings.bearer_token)?;

    info!(
        url = %settings.url,
        timeout_secs = settings.timeout.as_secs(),
        "Sending probe"
    );

    let outcome = run_probe(&client, &settings.url).await;

    match &outcome {
        ProbeOutcome::Reply { status, body } => {
            info!(status = *status, body_bytes = body.len(), "Probe got a reply");
        }
        ProbeOutcome::Failed { reason } => {
            info!(reason = %reason, "Probe did not complete");
        }
    }

    if cli.json {
        report::print_json(&settings.url, &outcome)?;
    } else {
        report::print_report(&settings.url, &outcome)?;
    }

    Ok(())
}
