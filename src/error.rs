//! Error types.
//!
//! Only caller-contract violations are errors: a path that cannot be opened,
//! a stream that fails to read or to seek back. Degraded detection (empty
//! input, truncated read, no signature match) is the unknown result value,
//! never an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to acquire bytes from a detection source.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from input")]
    Read(#[source] io::Error),

    /// The stream's original position could not be restored after the
    /// bounded read. The stream is left in an unspecified position.
    #[error("failed to restore stream position")]
    Restore(#[source] io::Error),
}
