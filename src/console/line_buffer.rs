//! Line buffer for command input

use crate::config::LINE_CAPACITY;

/// Fixed-capacity line input buffer.
///
/// Overflow policy: bytes past capacity are dropped and the buffer is
/// left unchanged. Nothing is reported on the wire.
pub struct LineBuffer {
    buf: [u8; LINE_CAPACITY],
    len: usize,
    /// Bytes discarded since the last clear
    dropped: usize,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_CAPACITY],
            len: 0,
            dropped: 0,
        }
    }

    /// Append a byte. Returns `false` if the buffer was full and the byte
    /// was discarded.
    pub fn push(&mut self, c: u8) -> bool {
        if self.len < LINE_CAPACITY {
            self.buf[self.len] = c;
            self.len += 1;
            true
        } else {
            self.dropped = self.dropped.saturating_add(1);
            false
        }
    }

    /// Clear buffer, zeroing every position
    pub fn clear(&mut self) {
        self.buf = [0u8; LINE_CAPACITY];
        self.len = 0;
        self.dropped = 0;
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == LINE_CAPACITY
    }

    /// Bytes dropped since the last clear
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Maximum number of stored bytes
    pub const fn capacity(&self) -> usize {
        LINE_CAPACITY
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
