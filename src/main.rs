//! Command-line interface for loggen
//!
//! # Usage Examples
//!
//! ```bash
//! # Synthesize JSON records into app_<timestamp>.log at one line per 200 ms
//! loggen app
//!
//! # Replay a captured log file in a loop, echoing each line to stdout
//! loggen --verbose app captured.log
//! ```
//!
//! The producer runs until interrupted; Ctrl-C terminates it cleanly with
//! a summary of what was written. Usage and I/O errors exit with status 2.

use anyhow::Context;
use clap::Parser;
use loggen::{produce_lines, timestamped_destination, Cli, CyclingFileSource, SyntheticSource};
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(2);
    }
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let destination = timestamped_destination(&cli.destination);
    let shutdown = setup_shutdown_handler();

    let metrics = match &cli.source {
        Some(source_path) => {
            // Opening the template up front means a bad source path fails
            // before the destination file exists on disk.
            let mut source = CyclingFileSource::open(source_path)?;
            info!(
                "Producing to '{}' from source '{}' (verbose: {})",
                destination.display(),
                source.path().display(),
                cli.verbose
            );
            produce_lines(&destination, &mut source, cli.verbose, shutdown)
                .await
                .with_context(|| format!("Failed while producing to {}", destination.display()))?
        }
        None => {
            info!(
                "Producing synthesized records to '{}' (verbose: {})",
                destination.display(),
                cli.verbose
            );
            let mut source = SyntheticSource;
            produce_lines(&destination, &mut source, cli.verbose, shutdown)
                .await
                .with_context(|| format!("Failed while producing to {}", destination.display()))?
        }
    };

    info!(
        "Produced {} lines, {} bytes in {:?} ({:.2} lines/sec)",
        metrics.lines_written,
        metrics.bytes_written,
        metrics.total_duration,
        metrics.lines_per_second()
    );

    Ok(())
}

/// Sets up a shutdown signal handler
fn setup_shutdown_handler() -> tokio::sync::broadcast::Receiver<()> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        info!("Received interrupt signal (Ctrl+C)");
        let _ = shutdown_tx.send(());
    });

    shutdown_rx
}
