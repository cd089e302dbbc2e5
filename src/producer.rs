//! Paced writer that drains a line source into the destination file.

use crate::error::ProduceError;
use crate::source::LineSource;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Fixed delay between consecutive writes.
pub const PACE_INTERVAL: Duration = Duration::from_millis(200);

/// Compute the destination path for a run starting now:
/// `<base>_<YYYY-MM-DDTHH_MM_SS>.log`, stamped from the local clock.
pub fn timestamped_destination(base: &str) -> PathBuf {
    destination_for(base, Local::now())
}

fn destination_for(base: &str, started: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "{}_{}.log",
        base,
        started.format("%Y-%m-%dT%H_%M_%S")
    ))
}

/// Metrics from a produce run.
#[derive(Debug, Clone, Default)]
pub struct ProduceMetrics {
    /// Number of lines written to the destination file.
    pub lines_written: u64,
    /// Bytes written to the destination file.
    pub bytes_written: u64,
    /// Total time spent producing.
    pub total_duration: Duration,
}

impl ProduceMetrics {
    /// Calculate lines per second.
    pub fn lines_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.lines_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drain `source` into `destination` at the fixed pace until shutdown.
///
/// The destination file is created (truncating any previous run) and then
/// appended to for the whole run. Each iteration waits [`PACE_INTERVAL`],
/// pulls one line, and writes it straight through to the file (no
/// buffering) so downstream tailers observe it immediately. With
/// `verbose` the line is also echoed to stdout without its trailing
/// newline.
///
/// There is no natural termination: the loop runs until the shutdown
/// channel fires (clean return with metrics) or an I/O error propagates.
pub async fn produce_lines<S: LineSource>(
    destination: &Path,
    source: &mut S,
    verbose: bool,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<ProduceMetrics, ProduceError> {
    let mut writer = File::create(destination).map_err(|err| ProduceError::DestinationCreate {
        path: destination.to_path_buf(),
        source: err,
    })?;

    let start_time = Instant::now();
    let mut metrics = ProduceMetrics::default();

    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                info!("Received shutdown signal");
                break;
            }
            _ = tokio::time::sleep(PACE_INTERVAL) => {
                let line = source.next_line()?;
                writer.write_all(line.as_bytes())?;

                metrics.lines_written += 1;
                metrics.bytes_written += line.len() as u64;

                if verbose {
                    println!("{}", line.trim_end_matches('\n'));
                }

                if metrics.lines_written % 100 == 0 {
                    debug!("Written {} lines", metrics.lines_written);
                }
            }
        }
    }

    metrics.total_duration = start_time.elapsed();
    Ok(metrics)
}
