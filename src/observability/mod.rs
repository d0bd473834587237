// src/observability/mod.rs
//! Tracing and logging setup
//!
//! Diagnostics from the recorder (dropped events, write failures, null name
//! pointers) are emitted through `tracing`. The host integration layer calls
//! [`init_tracing`] once during startup; the FFI shim also calls it lazily so
//! a simulator that links the library directly still gets diagnostics on
//! stderr without any Rust-side setup.

use crate::utils::errors::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, defaulting to `info`.
/// Returns `Ok` even when a subscriber is already installed (for example by
/// an embedding host), so repeated calls are harmless.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}
