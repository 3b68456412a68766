//! # sortcheck
//!
//! Streaming check that a binary file of little-endian `i32` values is in
//! non-decreasing order, reporting the first position where it is not.
//!
//! Intended for validating sorted integer runs produced or consumed by
//! external sorts, merges and index builders. Files of any size are read
//! through one fixed-size buffer (8 MiB by default).
//!
//! ## File format
//!
//! A flat sequence of 4-byte two's-complement integers, little-endian, no
//! header or padding. Element `i` occupies bytes `[4i, 4i + 4)`, so the file
//! length must be a multiple of 4.
//!
//! ## Usage Example
//!
//! ```no_run
//! use sortcheck::{first_inversion_index, Outcome};
//!
//! match first_inversion_index("run-0007.bin")? {
//!     Outcome::Sorted => println!("sorted"),
//!     Outcome::Inversion(i) => println!("a[{i}] < a[{}]", i - 1),
//! }
//! # Ok::<(), sortcheck::ScanError>(())
//! ```
//!
//! For a different buffer size, build a [`Scanner`] from a [`ScanConfig`]:
//!
//! ```no_run
//! use sortcheck::{ScanConfig, Scanner};
//!
//! let config = ScanConfig::default().with_buffer_capacity(64 * 1024)?;
//! let sorted = Scanner::new(config)?.is_sorted("merged.bin")?;
//! # Ok::<(), sortcheck::ScanError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;  // Buffer and retry settings
pub mod error;   // Error taxonomy
pub mod report;  // Driver output lines and exit codes
pub mod scanner; // Streaming scan

pub use config::ScanConfig;
pub use error::ScanError;
pub use scanner::{Outcome, Scanner};

use std::path::Path;

/// Find the first inversion in the file at `path` using default settings.
///
/// See [`Scanner::scan_file`] for the error cases.
pub fn first_inversion_index<P: AsRef<Path>>(path: P) -> Result<Outcome, ScanError> {
    Scanner::default().scan_file(path)
}

/// True iff the file at `path` is sorted, using default settings.
///
/// Empty and single-element files are sorted.
pub fn is_sorted<P: AsRef<Path>>(path: P) -> Result<bool, ScanError> {
    Scanner::default().is_sorted(path)
}
