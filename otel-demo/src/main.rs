#![forbid(unsafe_code)]

use clap::Parser;
use otel_demo_lib::telemetry::{init_logging, init_metrics, init_tracer};
use otel_demo_lib::{config::load_from_path, server, Config};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "OpenTelemetry metrics + tracing HTTP demo server")]
struct Cli {
    /// Path to configuration TOML file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_from_path(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("failed to load configuration: {err}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Err(err) = init_logging(&config.logging, &config.telemetry) {
        eprintln!("failed to initialize logging: {err}");
        std::process::exit(1);
    }

    if let Err(err) = serve(config).await {
        error!(%err, "server exited with error");
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> otel_demo_lib::Result<()> {
    let tracer_provider = if config.telemetry.trace_enabled {
        Some(init_tracer(&config.telemetry)?)
    } else {
        None
    };
    let (metrics, registry, meter_provider) = init_metrics()?;

    info!(listen = %config.listen, trace_enabled = config.telemetry.trace_enabled, "configuration loaded");

    let result = server::run(Arc::new(config), metrics, registry).await;

    // Flush buffered telemetry before exiting, whatever the serve outcome.
    if let Err(err) = meter_provider.shutdown() {
        warn!(%err, "meter provider shutdown failed");
    }
    if let Some(provider) = tracer_provider {
        if let Err(err) = provider.shutdown() {
            warn!(%err, "tracer provider shutdown failed");
        }
    }

    result
}
