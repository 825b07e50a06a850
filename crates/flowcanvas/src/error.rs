//! Error types for flowcanvas operations.
//!
//! Rendering itself never fails: an unmounted canvas turns every operation
//! into a no-op, malformed payload fields degrade to empty sequences, and
//! dangling edges are dropped. Errors only surface at the I/O boundary,
//! where files are read, payloads parsed, or configuration loaded.

use std::io;

use thiserror::Error;

/// The main error type for flowcanvas operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid diagram payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}
