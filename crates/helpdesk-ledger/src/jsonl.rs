// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON Lines interaction log.
//!
//! One JSON object per line, UTF-8, append-only. Each line is the record's
//! fields with a `timestamp` field merged in at write time. Readers skip lines
//! that do not parse as a record.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use helpdesk_core::{HelpdeskError, InteractionRecord, InteractionSink, LoggedInteraction};
use tracing::{debug, warn};

/// Current UTC time as ISO 8601 with microseconds and a `Z` suffix.
pub fn timestamp_now() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.6fZ")
        .to_string()
}

fn storage_err(e: impl std::error::Error + Send + Sync + 'static) -> HelpdeskError {
    HelpdeskError::Storage {
        source: Box::new(e),
    }
}

/// Append-only interaction log backed by a JSON Lines file.
///
/// The file and its parent directories are created on first append. The log
/// assumes a single writer and takes no lock.
#[derive(Debug, Clone)]
pub struct JsonlInteractionLog {
    path: PathBuf,
}

impl JsonlInteractionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every parsable entry from this log.
    pub fn load(&self) -> Result<LogLoad, HelpdeskError> {
        read_interactions(&self.path)
    }
}

impl InteractionSink for JsonlInteractionLog {
    fn append(&self, record: &InteractionRecord) -> Result<(), HelpdeskError> {
        let entry = LoggedInteraction {
            timestamp: timestamp_now(),
            record: record.clone(),
        };
        let mut line = serde_json::to_string(&entry).map_err(storage_err)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        debug!(
            path = %self.path.display(),
            intent = %record.intent,
            fallback = record.fallback,
            "interaction appended"
        );
        Ok(())
    }
}

/// Outcome of reading an interaction log.
#[derive(Debug, Clone, PartialEq)]
pub enum LogLoad {
    /// No log file exists at this path yet.
    Missing(PathBuf),
    /// The file was read; `skipped` counts non-blank lines that did not parse.
    Loaded {
        entries: Vec<LoggedInteraction>,
        skipped: usize,
    },
}

impl LogLoad {
    /// Parsed entries, empty when the log is missing.
    pub fn entries(&self) -> &[LoggedInteraction] {
        match self {
            LogLoad::Missing(_) => &[],
            LogLoad::Loaded { entries, .. } => entries,
        }
    }

    /// The parsed records without timestamps, in file order.
    pub fn records(&self) -> Vec<InteractionRecord> {
        self.entries().iter().map(|e| e.record.clone()).collect()
    }
}

/// Read an interaction log.
///
/// A missing file is reported as [`LogLoad::Missing`]. Blank lines are
/// ignored; lines that are not valid records (bad JSON, unknown intent labels,
/// missing `intent`/`router_intent`) are skipped with a warning. Any other I/O
/// failure is an error.
pub fn read_interactions(path: &Path) -> Result<LogLoad, HelpdeskError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "no interaction log found");
            return Ok(LogLoad::Missing(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in bytes.split(|b| *b == b'\n').enumerate() {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match serde_json::from_slice::<LoggedInteraction>(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                skipped += 1;
                warn!(
                    path = %path.display(),
                    line = index + 1,
                    error = %e,
                    "skipping malformed interaction log line"
                );
            }
        }
    }

    debug!(
        path = %path.display(),
        entries = entries.len(),
        skipped,
        "interaction log loaded"
    );
    Ok(LogLoad::Loaded { entries, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::{FallbackReason, Intent};
    use tracing_test::traced_test;

    fn escalated(message: &str) -> InteractionRecord {
        InteractionRecord {
            user_message: message.into(),
            intent: Intent::Escalation,
            router_intent: Intent::GeneralFaq,
            confidence: 0.0,
            fallback: true,
            fallback_reason: Some(FallbackReason::LowConfidence),
            latency_ms: 1,
            response_length: 150,
            answer_preview: "Escalation Agent:".into(),
        }
    }

    #[test]
    fn append_creates_parent_dirs_and_writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("interactions.jsonl");
        let log = JsonlInteractionLog::new(&path);

        log.append(&escalated("hello")).unwrap();
        log.append(&escalated("hi again")).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(text.ends_with('\n'));

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["user_message"], "hello");
        assert_eq!(first["intent"], "Escalation");
        assert_eq!(first["router_intent"], "General FAQ");
        assert_eq!(first["fallback_reason"], "low_confidence");
        let ts = first["timestamp"].as_str().unwrap();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn timestamp_is_the_first_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.jsonl");
        JsonlInteractionLog::new(&path)
            .append(&escalated("hello"))
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\"timestamp\":"));
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.jsonl");
        std::fs::write(&path, "{\"not\":\"a record\"}\n").unwrap();

        JsonlInteractionLog::new(&path)
            .append(&escalated("hello"))
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("{\"not\""));
    }

    #[test]
    fn round_trip_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlInteractionLog::new(dir.path().join("interactions.jsonl"));
        log.append(&escalated("hello")).unwrap();

        match log.load().unwrap() {
            LogLoad::Loaded { entries, skipped } => {
                assert_eq!(skipped, 0);
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].record, escalated("hello"));
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    #[traced_test]
    fn missing_file_is_a_distinct_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        let load = read_interactions(&path).unwrap();
        assert_eq!(load, LogLoad::Missing(path));
        assert!(load.entries().is_empty());
        assert!(logs_contain("no interaction log found"));
    }

    #[test]
    #[traced_test]
    fn malformed_lines_are_skipped_and_blank_lines_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.jsonl");
        let content = concat!(
            "{\"intent\":\"Billing\",\"router_intent\":\"Billing\",\"confidence\":1.0}\n",
            "\n",
            "   \n",
            "not json at all\n",
            "{\"intent\":\"Weather\",\"router_intent\":\"Weather\"}\n",
            "{\"user_message\":\"no intent\"}\n",
            "{\"timestamp\":\"2026-01-01T00:00:00Z\",\"intent\":\"Escalation\",\"router_intent\":\"General FAQ\",\"fallback\":true}\n",
        );
        std::fs::write(&path, content).unwrap();

        match read_interactions(&path).unwrap() {
            LogLoad::Loaded { entries, skipped } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(skipped, 3);
                assert_eq!(entries[0].record.intent, Intent::Billing);
                assert_eq!(entries[0].record.latency_ms, 0);
                assert_eq!(entries[0].timestamp, "");
                assert!(entries[1].record.fallback);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
        assert!(logs_contain("skipping malformed interaction log line"));
    }

    #[test]
    fn empty_file_loads_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.jsonl");
        std::fs::write(&path, "").unwrap();
        assert_eq!(
            read_interactions(&path).unwrap(),
            LogLoad::Loaded {
                entries: Vec::new(),
                skipped: 0
            }
        );
    }

    #[test]
    fn integer_confidence_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.jsonl");
        std::fs::write(
            &path,
            "{\"intent\":\"Billing\",\"router_intent\":\"Billing\",\"confidence\":1,\"latency_ms\":4}\r\n",
        )
        .unwrap();
        let load = read_interactions(&path).unwrap();
        let records = load.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].confidence, 1.0);
        assert_eq!(records[0].latency_ms, 4);
    }
}
