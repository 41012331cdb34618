//! Error types for trailer rendering

use std::io;
use thiserror::Error;

/// Trailer rendering error type
///
/// There is exactly one failure mode: a write to the underlying sink failed.
/// Nothing is retried, and no attempt is made to repair on-screen state after
/// a failure mid-repaint; callers should discard the controller and build a
/// new one against a fresh cursor position.
#[derive(Error, Debug)]
pub enum Error {
    /// Write to the underlying sink failed
    #[error("sink write failed: {0}")]
    Sink(#[from] io::Error),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Sink(e) => e,
        }
    }
}

/// Result type for trailer rendering operations
pub type Result<T> = std::result::Result<T, Error>;
