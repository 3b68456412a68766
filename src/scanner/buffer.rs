//! Fixed-capacity read buffer with separate fill and decode cursors

use super::ELEMENT_BYTES;

/// Byte region filled by reads and drained by element decoding.
///
/// Bytes in `[read, write)` are filled but not yet decoded. After each
/// drain at most `ELEMENT_BYTES - 1` of them remain, and [`compact`]
/// moves that residual to the front so the next read appends to it.
///
/// [`compact`]: ReadBuffer::compact
#[derive(Debug)]
pub struct ReadBuffer {
    data: Box<[u8]>,
    write: usize,
    read: usize,
}

impl ReadBuffer {
    /// Allocate a zeroed buffer of `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            write: 0,
            read: 0,
        }
    }

    /// Total capacity in bytes
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Unfilled tail of the buffer, the target of the next read
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.write..]
    }

    /// Record that `n` bytes were written into [`spare_mut`](Self::spare_mut)
    pub fn advance_write(&mut self, n: usize) {
        debug_assert!(self.write + n <= self.data.len());
        self.write += n;
    }

    /// Decode the next little-endian `i32`, if a whole one is buffered
    #[inline]
    pub fn next_element(&mut self) -> Option<i32> {
        let bytes = self.data[self.read..self.write].first_chunk::<ELEMENT_BYTES>()?;
        let value = i32::from_le_bytes(*bytes);
        self.read += ELEMENT_BYTES;
        Some(value)
    }

    /// Bytes filled but not yet decoded
    pub fn residual(&self) -> usize {
        self.write - self.read
    }

    /// Move the residual to the front and reset the decode cursor
    pub fn compact(&mut self) {
        if self.read == 0 {
            return;
        }
        self.data.copy_within(self.read..self.write, 0);
        self.write -= self.read;
        self.read = 0;
    }
}
