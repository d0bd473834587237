// src/recording/mod.rs
//! Event recording and persistence
//!
//! This module owns the accumulation-and-persistence core:
//!
//! - **Event**: the per-callback record and the append-only log
//! - **Recorder**: lifecycle state machine (active until one-shot finalize)
//! - **Format**: plain-text line serialization of `GenEventLog.txt`
//!
//! # Architecture
//!
//! ```text
//! Simulator → record_event() → EventLog (call order)
//!                  (FFI)           ↓
//!                          finalize() at teardown
//!                                  ↓
//!                          GenEventLog.txt
//! ```
//!
//! Appends are amortized O(1) and never block; finalization is one
//! synchronous, truncating file write.

pub mod event;
pub mod format;
pub mod recorder;

// Re-export commonly used types
pub use event::{EventLog, EventRecord};
pub use format::{format_record, parse_record, read_log, write_log};
pub use recorder::{EventRecorder, RecorderConfig, RecorderState, RecorderStats};
