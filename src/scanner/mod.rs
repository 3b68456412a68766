//! Streaming sortedness scan
//!
//! Reads a stream of packed little-endian `i32` values through a single
//! fixed-size buffer and stops at the first element that is strictly
//! smaller than its predecessor.
//!
//! Memory use is bounded by the configured buffer capacity regardless of
//! file size. Reads that end in the middle of an element are handled by
//! carrying the partial bytes over to the next read.

mod buffer;

pub use buffer::ReadBuffer;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::config::ScanConfig;
use crate::error::ScanError;

/// Width of one encoded element in bytes
pub const ELEMENT_BYTES: usize = 4;

/// Result of a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every element is `>=` its predecessor
    Sorted,
    /// Zero-based index `i` of the first element with `a[i] < a[i-1]`
    Inversion(u64),
}

impl Outcome {
    /// True for [`Outcome::Sorted`]
    pub fn is_sorted(&self) -> bool {
        matches!(self, Outcome::Sorted)
    }
}

/// Comparison state carried across reads
#[derive(Debug, Default)]
struct ScanState {
    prev: i32,
    have_prev: bool,
    /// Elements decoded and accepted so far
    index: u64,
}

impl ScanState {
    /// Feed the next element; returns its index if it breaks the order.
    #[inline]
    fn observe(&mut self, cur: i32) -> Option<u64> {
        if self.have_prev && cur < self.prev {
            return Some(self.index);
        }
        self.prev = cur;
        self.have_prev = true;
        self.index += 1;
        None
    }
}

/// Checks files (or arbitrary readers) for non-decreasing `i32` order
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScanConfig,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }
}

impl Scanner {
    /// Create a scanner, rejecting configs whose buffer cannot hold whole elements
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Scan the file at `path`.
    ///
    /// The file length is checked before any data is read: a length that
    /// is not a multiple of 4 fails with [`ScanError::BadSize`].
    ///
    /// # Errors
    /// - [`ScanError::OpenFailed`] if the path cannot be opened or is not a
    ///   regular file
    /// - [`ScanError::BadSize`] if the length is not a whole number of elements
    /// - [`ScanError::Io`] if reading fails part way
    /// - [`ScanError::Truncated`] if the file shrank during the scan
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<Outcome, ScanError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScanError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = file.metadata().map_err(|source| ScanError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ScanError::OpenFailed {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }

        let size = metadata.len();
        if size % ELEMENT_BYTES as u64 != 0 {
            debug!(path = %path.display(), size, "rejecting file with partial element");
            return Err(ScanError::BadSize { size });
        }
        debug!(
            path = %path.display(),
            size,
            elements = size / ELEMENT_BYTES as u64,
            "scanning file"
        );

        self.scan_reader(file)
    }

    /// Scan any byte stream.
    ///
    /// No length is known up front, so a stream that ends inside an
    /// element fails with [`ScanError::Truncated`] once it is exhausted.
    /// Reads may return any number of bytes; partial elements are carried
    /// over to the next read.
    pub fn scan_reader<R: Read>(&self, mut reader: R) -> Result<Outcome, ScanError> {
        let mut buffer = ReadBuffer::new(self.config.buffer_capacity);
        let mut state = ScanState::default();

        loop {
            let n = self.read_some(&mut reader, buffer.spare_mut())?;
            if n == 0 {
                break;
            }
            buffer.advance_write(n);

            while let Some(cur) = buffer.next_element() {
                if let Some(index) = state.observe(cur) {
                    debug!(index, "found first inversion");
                    return Ok(Outcome::Inversion(index));
                }
            }

            buffer.compact();
            trace!(bytes = n, residual = buffer.residual(), elements = state.index, "read chunk");
        }

        match buffer.residual() {
            0 => {
                debug!(elements = state.index, "stream is sorted");
                Ok(Outcome::Sorted)
            }
            residual => Err(ScanError::Truncated { residual }),
        }
    }

    /// True iff the file at `path` is sorted; errors propagate unchanged.
    pub fn is_sorted<P: AsRef<Path>>(&self, path: P) -> Result<bool, ScanError> {
        Ok(self.scan_file(path)?.is_sorted())
    }

    /// Read into `dst`, retrying interrupted reads up to the configured cap.
    ///
    /// `dst` is never empty here: the buffer capacity is a multiple of the
    /// element width and at most `ELEMENT_BYTES - 1` bytes survive compaction,
    /// so `Ok(0)` always means end of stream.
    fn read_some<R: Read>(&self, reader: &mut R, dst: &mut [u8]) -> Result<usize, ScanError> {
        let mut interrupted = 0u32;
        loop {
            match reader.read(dst) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    interrupted += 1;
                    if interrupted > self.config.max_interrupted_retries {
                        return Err(ScanError::Io(io::Error::new(
                            io::ErrorKind::Interrupted,
                            format!("read interrupted {interrupted} times in a row"),
                        )));
                    }
                    warn!(attempt = interrupted, "read interrupted, retrying");
                }
                Err(e) => return Err(ScanError::Io(e)),
            }
        }
    }
}
