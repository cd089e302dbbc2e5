//! Loggen Library
//!
//! A library for producing a paced, endless stream of log lines to a
//! timestamped file, simulating a live log producer for testing downstream
//! log-ingestion pipelines.
//!
//! # Features
//!
//! - Replay mode: cycle a template file's lines in original order forever
//! - Synthesized mode: emit a fixed-shape JSON record with a fresh
//!   local-time timestamp on every line
//! - Fixed 200 ms pacing between writes, flushed per line so tailers see
//!   output immediately
//! - Clean cancellation via a shutdown channel bound to Ctrl-C
//!
//! # Example
//!
//! ```ignore
//! use loggen::{produce_lines, timestamped_destination, SyntheticSource};
//!
//! let destination = timestamped_destination("app");
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);
//!
//! let metrics = produce_lines(&destination, &mut SyntheticSource, false, shutdown_rx).await?;
//! println!("Produced {} lines in {:?}", metrics.lines_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod producer;
pub mod source;

pub use args::Cli;
pub use error::ProduceError;
pub use producer::{produce_lines, timestamped_destination, ProduceMetrics, PACE_INTERVAL};
pub use source::{
    CyclingFileSource, LineSource, LogRecord, SyntheticSource, SYNTHETIC_MESSAGE,
    SYNTHETIC_TIME_TAKEN_MS,
};
