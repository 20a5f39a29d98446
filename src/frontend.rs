//! Presentation adapters
//!
//! Both adapters translate input into `KeyInput`s, push them through a
//! `Calculator` and render the resulting `Display`.

pub mod batch;
pub mod tui;

use std::io;
use thiserror::Error;

/// Frontend errors
#[derive(Debug, Error)]
pub enum FrontendError {
    /// I/O error from terminal or stream operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to encode a display as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
