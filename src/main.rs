//! Bridge Reconciler - merge local bridge history with the relayer's view
//!
//! Reads the local and relayer snapshots named in the config file, reconciles
//! them and prints the report to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use bridge_reconciler::config::{LoggingConfig, Settings};
use bridge_reconciler::{metrics, Reconciler};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::load()?;

    // Initialize logging
    init_logging(&settings.logging);

    info!("Starting Bridge Reconciler v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Local snapshot: {:?}, relayer snapshot: {:?}",
        settings.sources.local_path, settings.sources.relayer_path
    );

    let reconciler = Reconciler::from_config(&settings.sources).with_metrics(settings.metrics.enabled);

    let report = match reconciler.run().await {
        Ok(report) => report,
        Err(e) => {
            if e.is_input_error() {
                error!("Check the configured snapshot files: {}", e);
            }
            return Err(e).context("Reconciliation failed");
        }
    };

    let report = if settings.output.include_outdated {
        report
    } else {
        report.without_outdated()
    };

    let rendered = report
        .render(settings.output.format)
        .context("Failed to render report")?;
    println!("{}", rendered);

    if settings.metrics.enabled && settings.metrics.dump {
        eprintln!("{}", metrics::render()?);
    }

    info!("Bridge Reconciler finished");
    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr).with_target(true))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .init();
    }
}
