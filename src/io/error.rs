//! Load and write error types.

use crate::frame::FrameError;

/// Errors raised while loading a frame from CSV or Arrow IPC.
///
/// Every variant is fatal: nothing is retried, the error propagates to the
/// caller and the partially-built frame is dropped.
#[derive(Debug, thiserror::Error)]
pub enum FrameLoadError {
    /// Source file could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text (ragged rows, bad quoting, invalid UTF-8).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Arrow-level read failure.
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// A source column's type cannot be classified into the closed
    /// signed-integer / floating-point / other set.
    #[error("column '{column}': unsupported type (expected {expected}, got {got})")]
    UnsupportedType {
        column: String,
        expected: String,
        got: String,
    },

    /// The loaded columns do not assemble into a valid frame.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Errors raised while persisting a frame as Arrow IPC.
#[derive(Debug, thiserror::Error)]
pub enum FrameWriteError {
    /// Destination could not be created or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow-level write failure.
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
