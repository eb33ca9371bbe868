//! Exporter startup and lifecycle.

use anyhow::{Context, Result};
use ingestion::FrameReader;
use observability::{ExporterConfig, GaugeStore, MetricsServer};
use tracing::{error, info, warn};

use crate::cli::Cli;
use crate::pipeline::IngestLoop;

/// Open the byte source, start the metrics endpoint and run the
/// ingestion loop
///
/// Returns only when the byte source fails (an error, and a non-zero
/// exit) or a shutdown signal arrives (clean exit). A dead byte source
/// is not retried; restarting is the supervisor's job.
pub async fn run_exporter(cli: &Cli) -> Result<()> {
    info!(input = %cli.input.display(), "Opening byte source");

    let source = tokio::fs::File::open(&cli.input)
        .await
        .with_context(|| format!("failed to open input {}", cli.input.display()))?;

    // Gauge state shared between the loop (writes) and the endpoint (reads)
    let store = GaugeStore::new();
    dispatcher::register_gauges(&store);

    let server = MetricsServer::new(
        store.clone(),
        &dispatcher::gauges::CATALOG,
        ExporterConfig {
            listen_addr: cli.web_listen_address.clone(),
            telemetry_path: cli.web_telemetry_path.clone(),
            namespace: dispatcher::gauges::NAMESPACE.to_string(),
        },
    );
    let _server = server
        .spawn()
        .await
        .context("failed to start metrics endpoint")?;

    let shutdown_signal = setup_shutdown_signal();

    info!("Starting ingestion loop...");

    let ingest = IngestLoop::new(FrameReader::new(source), store);

    tokio::select! {
        (stats, stream_err) = ingest.run() => {
            error!(error = %stream_err, "Byte source failed, halting");
            stats.log_summary();
            Err(stream_err).context("ingestion loop halted")
        }
        _ = shutdown_signal => {
            warn!("Received shutdown signal, stopping exporter...");
            Ok(())
        }
    }
}

/// Setup Ctrl+C and SIGTERM signal handlers
async fn setup_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
