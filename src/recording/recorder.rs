// src/recording/recorder.rs
//! Event recorder with a one-shot finalization lifecycle
//!
//! Accumulates records in call order and writes them out exactly once when
//! the host's teardown hook fires. Ingestion never fails the caller: append
//! errors do not exist (the log is unbounded), and finalization failures are
//! logged and swallowed at the component boundary.

use crate::recording::event::{EventLog, EventRecord};
use crate::recording::format;
use crate::utils::errors::Result;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Default output artifact, written to the process working directory
pub const DEFAULT_OUTPUT_PATH: &str = "GenEventLog.txt";

/// Recorder configuration
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Output artifact path (fixed to [`DEFAULT_OUTPUT_PATH`] on the FFI
    /// surface; host integration code and tests may point it elsewhere)
    pub output_path: PathBuf,

    /// Initial log allocation, in records
    pub capacity_hint: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            capacity_hint: 4096,
        }
    }
}

/// Recorder lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// Accepting ingestion
    Active,

    /// Terminal: the log has been consumed (written or discarded)
    Finalized,
}

/// Accumulates simulation events and persists them at shutdown
///
/// Single-logical-thread caller contract: the recorder performs no internal
/// locking. Multi-threaded ingestion requires external synchronization
/// around the append path (the FFI shim provides it for the C boundary).
pub struct EventRecorder {
    config: RecorderConfig,
    log: EventLog,
    state: RecorderState,
    finalize_outcome: Option<Result<usize>>,
    stats: RecorderStats,
}

impl EventRecorder {
    /// Create a recorder with an empty log
    pub fn new(config: RecorderConfig) -> Self {
        debug!("Initializing event recorder, output {:?}", config.output_path);
        let log = EventLog::with_capacity(config.capacity_hint);
        Self {
            config,
            log,
            state: RecorderState::Active,
            finalize_outcome: None,
            stats: RecorderStats::default(),
        }
    }

    /// Append one event in call order
    ///
    /// Never fails the caller. After finalization the record is dropped
    /// (counted in [`RecorderStats::events_dropped`]) instead of appended.
    pub fn record(&mut self, name: impl Into<String>, id: i64, parent: i64, cycle: i64, data: i64) {
        if self.state == RecorderState::Finalized {
            self.stats.events_dropped += 1;
            debug!("Event dropped: recorder already finalized");
            return;
        }

        self.log.append(EventRecord::new(name, id, parent, cycle, data));
        self.stats.events_recorded += 1;
    }

    /// Write the buffered log to the output artifact, exactly once
    ///
    /// Returns the number of events written. A second call is a no-op that
    /// repeats the first call's outcome without touching the artifact. On
    /// write failure the log is discarded (no retry, no alternate path) and
    /// the error is reported; the FFI shim swallows it so nothing crosses
    /// the foreign-function boundary.
    pub fn finalize(&mut self) -> Result<usize> {
        if let Some(outcome) = &self.finalize_outcome {
            debug!("Finalize called again; keeping prior outcome");
            return outcome.clone();
        }

        self.state = RecorderState::Finalized;
        let records = self.log.take();

        let outcome = match format::write_log(&self.config.output_path, &records) {
            Ok(bytes) => {
                self.stats.events_written = records.len() as u64;
                self.stats.bytes_written = bytes as u64;
                info!(
                    "Event log written: {} events to {:?}",
                    records.len(),
                    self.config.output_path
                );
                Ok(records.len())
            }
            Err(e) => {
                error!("Event log FAILED, discarding {} events: {}", records.len(), e);
                Err(e)
            }
        };

        self.finalize_outcome = Some(outcome.clone());
        outcome
    }

    /// Current lifecycle state
    pub fn state(&self) -> RecorderState {
        self.state
    }

    /// Check whether finalization has run
    pub fn is_finalized(&self) -> bool {
        self.state == RecorderState::Finalized
    }

    /// Records buffered so far (empty after finalization)
    pub fn pending(&self) -> &[EventRecord] {
        self.log.records()
    }

    /// Recorder counters
    pub fn stats(&self) -> RecorderStats {
        self.stats.clone()
    }

    /// Configured output path
    pub fn output_path(&self) -> &std::path::Path {
        &self.config.output_path
    }
}

/// Recorder statistics
#[derive(Debug, Clone, Default)]
pub struct RecorderStats {
    /// Events appended while active
    pub events_recorded: u64,

    /// Events dropped after finalization
    pub events_dropped: u64,

    /// Events persisted by finalize
    pub events_written: u64,

    /// Bytes written to the output artifact
    pub bytes_written: u64,
}

impl Drop for EventRecorder {
    /// Scoped-resource fallback: if the host never wires up the shutdown
    /// hook, flush on drop rather than losing the log. The one-shot check in
    /// [`EventRecorder::finalize`] makes this a no-op after an explicit call.
    fn drop(&mut self) {
        if self.finalize_outcome.is_none() && !self.log.is_empty() {
            let _ = self.finalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::RecorderError;
    use tempfile::tempdir;

    fn config_at(dir: &std::path::Path) -> RecorderConfig {
        RecorderConfig {
            output_path: dir.join("GenEventLog.txt"),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_path() {
        let config = RecorderConfig::default();
        assert_eq!(config.output_path, PathBuf::from("GenEventLog.txt"));
    }

    #[test]
    fn test_scenario_two_events_exact_output() {
        let dir = tempdir().unwrap();
        let mut recorder = EventRecorder::new(config_at(dir.path()));

        recorder.record("start", 1, 0, 0, 100);
        recorder.record("end", 2, 1, 5, 200);

        let written = recorder.finalize().unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(recorder.output_path()).unwrap();
        assert_eq!(contents, "start 1 0 0 100 \nend 2 1 5 200 \n");
    }

    #[test]
    fn test_order_matches_call_order() {
        let dir = tempdir().unwrap();
        let mut recorder = EventRecorder::new(config_at(dir.path()));

        // Appended out of cycle order on purpose.
        recorder.record("commit", 9, 3, 40, 0);
        recorder.record("fetch", 1, 0, 2, 0);
        recorder.record("issue", 3, 1, 11, 0);
        recorder.finalize().unwrap();

        let contents = std::fs::read_to_string(recorder.output_path()).unwrap();
        let first_fields: Vec<&str> = contents.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(first_fields[0], "commit");
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_zero_events_empty_artifact() {
        let dir = tempdir().unwrap();
        let mut recorder = EventRecorder::new(config_at(dir.path()));

        let written = recorder.finalize().unwrap();
        assert_eq!(written, 0);

        let contents = std::fs::read_to_string(recorder.output_path()).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_double_finalize_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut recorder = EventRecorder::new(config_at(dir.path()));

        recorder.record("start", 1, 0, 0, 100);
        assert_eq!(recorder.finalize().unwrap(), 1);
        assert_eq!(recorder.finalize().unwrap(), 1);

        let contents = std::fs::read_to_string(recorder.output_path()).unwrap();
        assert_eq!(contents, "start 1 0 0 100 \n");
    }

    #[test]
    fn test_record_after_finalize_is_dropped() {
        let dir = tempdir().unwrap();
        let mut recorder = EventRecorder::new(config_at(dir.path()));

        recorder.record("start", 1, 0, 0, 100);
        recorder.finalize().unwrap();
        recorder.record("late", 2, 1, 9, 0);

        let stats = recorder.stats();
        assert_eq!(stats.events_recorded, 1);
        assert_eq!(stats.events_dropped, 1);

        // Artifact unchanged by the late record.
        let contents = std::fs::read_to_string(recorder.output_path()).unwrap();
        assert_eq!(contents, "start 1 0 0 100 \n");
    }

    #[test]
    fn test_unwritable_path_reports_and_discards() {
        let dir = tempdir().unwrap();
        let config = RecorderConfig {
            output_path: dir.path().join("missing").join("GenEventLog.txt"),
            ..Default::default()
        };
        let mut recorder = EventRecorder::new(config);

        recorder.record("start", 1, 0, 0, 100);
        let result = recorder.finalize();
        assert!(matches!(result, Err(RecorderError::WriteFailed(_))));

        // Log discarded, state terminal, second finalize repeats the outcome.
        assert!(recorder.is_finalized());
        assert!(recorder.pending().is_empty());
        assert!(recorder.finalize().is_err());
    }

    #[test]
    fn test_stats_counters() {
        let dir = tempdir().unwrap();
        let mut recorder = EventRecorder::new(config_at(dir.path()));

        recorder.record("a", 1, 0, 0, 0);
        recorder.record("b", 2, 1, 1, 0);
        recorder.finalize().unwrap();

        let stats = recorder.stats();
        assert_eq!(stats.events_recorded, 2);
        assert_eq!(stats.events_written, 2);
        assert_eq!(stats.bytes_written as usize, "a 1 0 0 0 \nb 2 1 1 0 \n".len());
    }

    #[test]
    fn test_drop_flushes_unfinalized_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("GenEventLog.txt");
        {
            let mut recorder = EventRecorder::new(RecorderConfig {
                output_path: path.clone(),
                ..Default::default()
            });
            recorder.record("start", 1, 0, 0, 100);
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "start 1 0 0 100 \n");
    }

    #[test]
    fn test_full_range_fields_survive() {
        let dir = tempdir().unwrap();
        let mut recorder = EventRecorder::new(config_at(dir.path()));

        recorder.record("extreme", i64::MAX, i64::MIN, -1, i64::MIN + 1);
        recorder.finalize().unwrap();

        let records = crate::recording::format::read_log(recorder.output_path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, i64::MAX);
        assert_eq!(records[0].parent, i64::MIN);
        assert_eq!(records[0].cycle, -1);
        assert_eq!(records[0].data, i64::MIN + 1);
    }
}
