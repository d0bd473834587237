// src/recording/event.rs
//! Event record and append-only log
//!
//! One `EventRecord` per simulator callback; the `EventLog` keeps them in
//! call order until finalization consumes the whole sequence.

use serde::{Deserialize, Serialize};

/// One observed simulation event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event label, copied from the caller's buffer at ingestion time
    pub name: String,

    /// Event identifier (no uniqueness enforced)
    pub id: i64,

    /// Identifier of the causally preceding event, 0 meaning "none"
    pub parent: i64,

    /// Simulation cycle at which the event was reported
    pub cycle: i64,

    /// Opaque payload value
    pub data: i64,
}

impl EventRecord {
    /// Create a new record, taking ownership of the name
    pub fn new(name: impl Into<String>, id: i64, parent: i64, cycle: i64, data: i64) -> Self {
        Self {
            name: name.into(),
            id,
            parent,
            cycle,
            data,
        }
    }
}

/// Append-only ordered sequence of event records
///
/// Insertion order is the contract: the log is never reordered by id, parent,
/// or cycle, and records are never mutated or removed before finalization.
#[derive(Debug, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record, preserving call order (amortized O(1))
    pub fn append(&mut self, record: EventRecord) {
        self.records.push(record);
    }

    /// Consume the log, yielding all records in insertion order
    ///
    /// The log is left empty; finalization calls this exactly once.
    pub fn take(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.records)
    }

    /// View the buffered records in insertion order
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Number of buffered records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
