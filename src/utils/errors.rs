// src/utils/errors.rs
//! Error types for the recorder
//!
//! All failures are local to this crate: nothing here ever crosses the
//! foreign-function boundary. The FFI shim logs and swallows these.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RecorderError>;

/// Recorder errors
///
/// Variants carry a formatted message rather than the source error so the
/// finalize outcome stays cloneable for idempotent re-finalization.
#[derive(Debug, Clone, Error)]
pub enum RecorderError {
    /// Writing the output artifact failed (open, write, or flush)
    #[error("event log write failed: {0}")]
    WriteFailed(String),

    /// Reading the output artifact back failed
    #[error("event log read failed: {0}")]
    ReadFailed(String),

    /// A log line did not match the `name id parent cycle data` format
    #[error("event line parse failed: {0}")]
    ParseFailed(String),
}
