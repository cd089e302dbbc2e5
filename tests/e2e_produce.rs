//! End-to-end tests for the paced producer.
//!
//! These drive the library API the same way the binary does: construct a
//! line source, run the produce loop against a temp directory, stop it via
//! the shutdown channel, and inspect the destination file.

use loggen::{produce_lines, CyclingFileSource, SyntheticSource};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::broadcast;

/// How long the timed runs last. A touch over one second so the 200 ms
/// pace lands comfortably inside the expected 3..=6 line window.
const RUN_FOR: Duration = Duration::from_millis(1050);

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("loggen=debug")
        .try_init()
        .ok();
}

#[tokio::test]
async fn test_replay_pacing_and_cycling_e2e() {
    init_logging();

    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template.log");
    std::fs::write(&template, "alpha\nbeta\n").unwrap();
    let destination = temp_dir.path().join("out.log");

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let mut source = CyclingFileSource::open(&template).unwrap();

    let dest = destination.clone();
    let producer =
        tokio::spawn(async move { produce_lines(&dest, &mut source, false, shutdown_rx).await });

    tokio::time::sleep(RUN_FOR).await;
    shutdown_tx.send(()).unwrap();
    let metrics = producer.await.unwrap().unwrap();

    // ~1 s at one line per 200 ms.
    assert!(
        (3..=6).contains(&metrics.lines_written),
        "lines_written = {}",
        metrics.lines_written
    );

    let content = std::fs::read_to_string(&destination).unwrap();
    assert!(content.ends_with('\n'));

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len() as u64, metrics.lines_written);

    // Template lines repeat in original order, wrapping after the last.
    for (i, line) in lines.iter().enumerate() {
        let expected = if i % 2 == 0 { "alpha" } else { "beta" };
        assert_eq!(*line, expected, "line {i}");
    }
}

#[tokio::test]
async fn test_synthesized_records_e2e() {
    init_logging();

    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("out.log");

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    let dest = destination.clone();
    let producer = tokio::spawn(async move {
        let mut source = SyntheticSource;
        produce_lines(&dest, &mut source, false, shutdown_rx).await
    });

    tokio::time::sleep(RUN_FOR).await;
    shutdown_tx.send(()).unwrap();
    let metrics = producer.await.unwrap().unwrap();

    assert!(
        (3..=6).contains(&metrics.lines_written),
        "lines_written = {}",
        metrics.lines_written
    );

    let content = std::fs::read_to_string(&destination).unwrap();
    let mut last_timestamp = None;

    for line in content.lines() {
        let json: serde_json::Value = serde_json::from_str(line).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["message"], "Some really fancy log line");
        assert_eq!(obj["time_taken_ms"], 200);

        let ts = chrono::DateTime::parse_from_rfc3339(obj["timestamp"].as_str().unwrap()).unwrap();
        if let Some(prev) = last_timestamp {
            assert!(ts >= prev, "timestamps went backwards");
        }
        last_timestamp = Some(ts);
    }
}

#[tokio::test]
async fn test_missing_source_fails_before_destination_exists() {
    init_logging();

    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.log");

    let result = CyclingFileSource::open(&missing);
    assert!(result.is_err());

    // The binary only computes and creates the destination after the
    // template opens, so a bad source leaves the directory untouched.
    let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
    assert!(entries.is_empty());
}
