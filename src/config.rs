//! Scanner configuration
//!
//! Controls the size of the read buffer and how persistently interrupted
//! reads are retried.

use crate::error::ScanError;
use crate::scanner::ELEMENT_BYTES;

/// Default read buffer capacity: 8 MiB
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024 * 1024;

/// Default cap on consecutive interrupted reads before giving up
pub const DEFAULT_MAX_INTERRUPTED_RETRIES: u32 = 1024;

/// Configuration parameters for a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Read buffer capacity in bytes (multiple of 4, at least 4)
    pub buffer_capacity: usize,

    /// Consecutive `Interrupted` reads tolerated before the scan fails
    pub max_interrupted_retries: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            max_interrupted_retries: DEFAULT_MAX_INTERRUPTED_RETRIES,
        }
    }
}

impl ScanConfig {
    /// Replace the buffer capacity, rejecting values that cannot hold
    /// whole elements.
    pub fn with_buffer_capacity(mut self, bytes: usize) -> Result<Self, ScanError> {
        check_capacity(bytes)?;
        self.buffer_capacity = bytes;
        Ok(self)
    }

    /// Replace the interrupted-read retry cap
    pub fn with_max_interrupted_retries(mut self, retries: u32) -> Self {
        self.max_interrupted_retries = retries;
        self
    }

    /// Check invariants for configs built by struct literal
    pub fn validate(&self) -> Result<(), ScanError> {
        check_capacity(self.buffer_capacity)
    }
}

fn check_capacity(bytes: usize) -> Result<(), ScanError> {
    if bytes < ELEMENT_BYTES || bytes % ELEMENT_BYTES != 0 {
        return Err(ScanError::InvalidCapacity(bytes));
    }
    Ok(())
}
