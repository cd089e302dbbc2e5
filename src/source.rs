//! Line sources for the producer.
//!
//! A line source yields an endless sequence of newline-terminated lines,
//! either by replaying a template file in a loop or by synthesizing one
//! JSON record per call.

use crate::error::ProduceError;
use chrono::{Local, SecondsFormat};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Message carried by every synthesized record.
pub const SYNTHETIC_MESSAGE: &str = "Some really fancy log line";

/// `time_taken_ms` value carried by every synthesized record.
pub const SYNTHETIC_TIME_TAKEN_MS: u64 = 200;

/// An endless sequence of log lines.
///
/// Implementations never signal completion, and every returned line ends
/// with exactly one `\n`.
pub trait LineSource {
    /// Produce the next line.
    fn next_line(&mut self) -> Result<String, ProduceError>;
}

/// Replays a template file line by line, seeking back to the start at end
/// of file so the sequence repeats in original order forever.
///
/// The file handle stays open for the lifetime of the source.
pub struct CyclingFileSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl CyclingFileSource {
    /// Open `path` for cyclic replay.
    ///
    /// Failing here leaves no trace on disk, so callers can validate the
    /// template before creating any output file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProduceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|err| ProduceError::SourceOpen {
            path: path.clone(),
            source: err,
        })?;
        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    /// Path of the template file being replayed.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for CyclingFileSource {
    fn next_line(&mut self) -> Result<String, ProduceError> {
        let mut line = String::new();
        loop {
            line.clear();
            let bytes = self.reader.read_line(&mut line)?;
            if bytes == 0 {
                // End of file: rewind and replay from the first line.
                // An empty template never yields anything.
                self.reader.seek(SeekFrom::Start(0))?;
                continue;
            }
            return Ok(normalize_newline(line));
        }
    }
}

/// Strip the line's own terminator (`\n` or `\r\n`) and re-append a single
/// `\n`.
fn normalize_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line.push('\n');
    line
}

/// The fixed-shape record emitted in synthesized mode.
#[derive(Debug, Serialize)]
pub struct LogRecord {
    /// ISO-8601 timestamp with the local timezone offset.
    pub timestamp: String,
    /// Fixed message payload.
    pub message: &'static str,
    /// Fixed simulated handling time in milliseconds.
    pub time_taken_ms: u64,
}

impl LogRecord {
    /// Capture a record stamped with the current local time.
    pub fn now() -> Self {
        Self {
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            message: SYNTHETIC_MESSAGE,
            time_taken_ms: SYNTHETIC_TIME_TAKEN_MS,
        }
    }
}

/// Synthesizes one JSON record per call; holds no state between calls.
pub struct SyntheticSource;

impl LineSource for SyntheticSource {
    fn next_line(&mut self) -> Result<String, ProduceError> {
        let mut line = serde_json::to_string(&LogRecord::now())?;
        line.push('\n');
        Ok(line)
    }
}
