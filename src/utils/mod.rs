// src/utils/mod.rs
//! Common utilities and helpers

pub mod errors;

pub use errors::{RecorderError, Result};
