// src/lib.rs
//! GenEvent Recorder Library
//!
//! An event-ingestion sink for hardware simulators. The simulator's DPI
//! bridge calls in once per annotated event with a name and four signed
//! 64-bit fields; the sink buffers them in call order and writes
//! `GenEventLog.txt` when the host's teardown hook fires. The log feeds
//! downstream microarchitecture-visualization tooling.
//!
//! # Architecture
//!
//! The crate is structured into a few small modules:
//!
//! - **recording**: record buffer, append path, one-shot finalization
//! - **ffi**: C ABI ingestion shim and the process-wide recorder slot
//! - **observability**: tracing setup for diagnostics
//! - **utils**: errors and common helpers
//!
//! # Embedding
//!
//! A simulator links the `staticlib`/`cdylib` and imports two symbols:
//! `record_event` for ingestion and `finalize_event_log` for its shutdown
//! sequence. Rust hosts can instead drive an [`EventRecorder`] directly, or
//! point the shared one at a chosen path with [`ffi::install_recorder`].

// Public module exports
pub mod ffi;
pub mod observability;
pub mod recording;
pub mod utils;

// Re-export commonly used types
pub use recording::event::{EventLog, EventRecord};
pub use recording::recorder::{EventRecorder, RecorderConfig, RecorderState, RecorderStats};
pub use utils::errors::{RecorderError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
