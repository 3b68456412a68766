//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::io::{self, Read, Write};

use tempfile::NamedTempFile;

/// Encode values as packed little-endian `i32`s
pub fn encode(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Write raw bytes to a fresh temporary file
pub fn write_fixture(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

/// Reference answer computed over the decoded values directly
pub fn naive_first_inversion(values: &[i32]) -> Option<u64> {
    values
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| (i + 1) as u64)
}

/// Reader that hands out at most `chunk` bytes per call, so element
/// boundaries rarely line up with read boundaries.
pub struct ChunkedReader<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        assert!(chunk > 0, "chunk size must be positive");
        Self { data, chunk }
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
