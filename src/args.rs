//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Paced log producer for exercising log-ingestion pipelines.
///
/// Appends one line every 200 ms to `<DESTINATION>_<timestamp>.log`,
/// replaying SOURCE in a loop when given, otherwise synthesizing JSON
/// records.
#[derive(Parser, Debug)]
#[command(name = "loggen")]
pub struct Cli {
    /// Base name for the destination log file; the start timestamp and the
    /// `.log` extension are appended
    pub destination: String,

    /// Optional template file whose lines are replayed in order, cycling
    /// back to the first line at end of file
    pub source: Option<PathBuf>,

    /// Also echo emitted lines to stdout
    #[arg(short, long)]
    pub verbose: bool,
}
