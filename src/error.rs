//! Errors raised while scanning an integer file

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while checking a file for sortedness
#[derive(Error, Debug)]
pub enum ScanError {
    /// The input path could not be opened for reading
    #[error("cannot open {}", .path.display())]
    OpenFailed {
        /// Path that was passed to the scanner
        path: PathBuf,
        /// Underlying open failure
        #[source]
        source: io::Error,
    },

    /// File length is not a whole number of 4-byte elements
    #[error("file size not divisible by 4: {size}")]
    BadSize {
        /// Length of the file in bytes
        size: u64,
    },

    /// A read failed part way through the scan
    #[error("read failed")]
    Io(#[from] io::Error),

    /// The stream ended inside an element
    #[error("unexpected leftover bytes at end: {residual}")]
    Truncated {
        /// Number of bytes (1..=3) that did not form a full element
        residual: usize,
    },

    /// Read buffer capacity must be a positive multiple of 4
    #[error("invalid buffer capacity {0}: must be a multiple of 4 and at least 4")]
    InvalidCapacity(usize),
}

impl ScanError {
    /// Structural errors are detected before any element is compared:
    /// the input cannot be opened, has the wrong shape, or the scanner
    /// was misconfigured.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ScanError::OpenFailed { .. } | ScanError::BadSize { .. } | ScanError::InvalidCapacity(_)
        )
    }
}
