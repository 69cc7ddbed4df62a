//! Non-blocking logging for the stopwatch.
//!
//! ```text
//! Console loop            LogStream             Log drain
//! ────────────            ─────────             ─────────
//!
//! rt_info!() ─────────▶ [L0][L1][L2] ─────────▶ log UART / stderr
//! non-blocking            lock-free             blocking ok
//! ```
//!
//! The command UART never carries log output, so logging cannot disturb
//! the wire protocol. Producers never wait: when the ring is full the
//! entry is dropped and counted.
//!
//! The timer ISR does not log at all.

use core::cell::UnsafeCell;
use core::fmt::Write;
use core::sync::atomic::{AtomicU32, Ordering};

/// Maximum message length.
pub const MAX_MSG_LEN: usize = 64;

/// Log buffer size (number of entries).
pub const LOG_BUFFER_SIZE: usize = 32;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// A single log entry.
#[derive(Clone, Copy)]
pub struct LogEntry {
    /// Timestamp in microseconds (derived from the tick counter).
    pub timestamp_us: i64,
    pub level: LogLevel,
    /// Message length.
    pub len: u8,
    /// Message bytes (not null-terminated).
    pub msg: [u8; MAX_MSG_LEN],
}

impl LogEntry {
    pub const EMPTY: Self = Self {
        timestamp_us: 0,
        level: LogLevel::Info,
        len: 0,
        msg: [0; MAX_MSG_LEN],
    };

    /// Message text, or a placeholder if truncation split a UTF-8 sequence.
    pub fn message(&self) -> &str {
        core::str::from_utf8(&self.msg[..self.len as usize]).unwrap_or("<invalid utf8>")
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One ring slot. `seq` is stored relative to the slot index so every slot
/// can start from the same `const` value.
struct Slot {
    seq: AtomicU32,
    entry: UnsafeCell<LogEntry>,
}

impl Slot {
    const EMPTY: Self = Self {
        seq: AtomicU32::new(0),
        entry: UnsafeCell::new(LogEntry::EMPTY),
    };
}

/// Bounded lock-free log ring (multiple producers, single consumer).
///
/// - Producers claim a position with a CAS on `write_idx`
/// - A slot is handed to the consumer only after its bytes are written
/// - Push never blocks (drops message if full)
/// - The drain task empties it at leisure
pub struct LogStream<const N: usize = LOG_BUFFER_SIZE> {
    slots: [Slot; N],
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: a slot's entry is written only by the producer that won the CAS
// for its position and read only by the single consumer after the slot's
// sequence number publishes it.
unsafe impl<const N: usize> Sync for LogStream<N> {}
unsafe impl<const N: usize> Send for LogStream<N> {}

impl<const N: usize> LogStream<N> {
    const MASK: usize = N - 1;

    /// Create a new empty log stream.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Log buffer size must be power of 2");

        Self {
            slots: [Slot::EMPTY; N],
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Sequence number of the slot at `idx`.
    #[inline]
    fn seq(&self, idx: usize) -> u32 {
        self.slots[idx].seq.load(Ordering::Acquire).wrapping_add(idx as u32)
    }

    #[inline]
    fn publish(&self, idx: usize, seq: u32) {
        self.slots[idx].seq.store(seq.wrapping_sub(idx as u32), Ordering::Release);
    }

    /// Queue an entry without blocking.
    ///
    /// Returns `true` if message was queued, `false` if dropped (ring full).
    pub fn push(&self, timestamp_us: i64, level: LogLevel, msg: &[u8]) -> bool {
        let mut pos = self.write_idx.load(Ordering::Relaxed);
        let idx = loop {
            let idx = (pos as usize) & Self::MASK;
            let diff = self.seq(idx).wrapping_sub(pos) as i32;

            if diff == 0 {
                match self.write_idx.compare_exchange_weak(
                    pos,
                    pos.wrapping_add(1),
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                ) {
                    Ok(_) => break idx,
                    Err(current) => pos = current,
                }
            } else if diff < 0 {
                // Slot still holds an undrained entry from the previous lap.
                self.dropped.fetch_add(1, Ordering::Relaxed);
                return false;
            } else {
                pos = self.write_idx.load(Ordering::Relaxed);
            }
        };

        // SAFETY: winning the CAS gives this producer exclusive use of the slot
        // until it is published below.
        unsafe {
            let entry = &mut *self.slots[idx].entry.get();
            entry.timestamp_us = timestamp_us;
            entry.level = level;
            entry.len = msg.len().min(MAX_MSG_LEN) as u8;
            entry.msg[..entry.len as usize].copy_from_slice(&msg[..entry.len as usize]);
        }

        self.publish(idx, pos.wrapping_add(1));
        true
    }

    /// Take the oldest entry, if any.
    ///
    /// Single consumer only.
    pub fn drain(&self) -> Option<LogEntry> {
        let pos = self.read_idx.load(Ordering::Relaxed);
        let idx = (pos as usize) & Self::MASK;

        if self.seq(idx) != pos.wrapping_add(1) {
            return None;
        }

        // SAFETY: the sequence number shows the producer has finished.
        let entry = unsafe { *self.slots[idx].entry.get() };

        self.publish(idx, pos.wrapping_add(N as u32));
        self.read_idx.store(pos.wrapping_add(1), Ordering::Release);
        Some(entry)
    }

    /// Get count of dropped messages.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Reset dropped counter (e.g., after reporting).
    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Number of claimed entries not yet drained.
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Acquire);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }
}

impl<const N: usize> Default for LogStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// `core::fmt::Write` over a fixed byte slice. Silently truncates.
pub struct BufWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BufWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }
}

impl Write for BufWriter<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        let to_write = bytes.len().min(self.buf.len() - self.pos);
        self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
        self.pos += to_write;
        Ok(())
    }
}

/// Format a message into a buffer.
///
/// Returns the number of bytes written.
#[inline]
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    let mut writer = BufWriter::new(buf);
    let _ = writer.write_fmt(args);
    writer.len()
}

/// Render an entry as `[timestamp_us] LEVEL: message\n`.
///
/// Returns the number of bytes written.
pub fn format_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    format_to_buffer(
        buf,
        format_args!(
            "[{:10}] {}: {}\n",
            entry.timestamp_us,
            entry.level.as_str(),
            entry.message()
        ),
    )
}

/// Non-blocking log macro.
///
/// # Example
///
/// ```ignore
/// rt_log!(LogLevel::Info, LOG_STREAM, timestamp, "elapsed {}s", secs);
/// ```
#[macro_export]
macro_rules! rt_log {
    ($level:expr, $stream:expr, $timestamp:expr, $($arg:tt)*) => {{
        let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
        let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
        $stream.push($timestamp, $level, &buf[..len]);
    }};
}

#[macro_export]
macro_rules! rt_info {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::rt_log!($crate::logging::LogLevel::Info, $stream, $timestamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! rt_warn {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::rt_log!($crate::logging::LogLevel::Warn, $stream, $timestamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! rt_error {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::rt_log!($crate::logging::LogLevel::Error, $stream, $timestamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! rt_debug {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::rt_log!($crate::logging::LogLevel::Debug, $stream, $timestamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! rt_trace {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::rt_log!($crate::logging::LogLevel::Trace, $stream, $timestamp, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain() {
        let stream = LogStream::<8>::new();

        assert!(stream.push(1000, LogLevel::Info, b"START"));
        assert_eq!(stream.pending(), 1);

        let entry = stream.drain().unwrap();
        assert_eq!(entry.timestamp_us, 1000);
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message(), "START");

        assert!(stream.drain().is_none());
    }

    #[test]
    fn test_full_ring_drops() {
        let stream = LogStream::<4>::new();

        for i in 0..4 {
            assert!(stream.push(i, LogLevel::Debug, b"x"));
        }
        assert!(!stream.push(5, LogLevel::Debug, b"y"));
        assert!(!stream.push(6, LogLevel::Debug, b"z"));
        assert_eq!(stream.dropped(), 2);
        assert_eq!(stream.pending(), 4);

        stream.drain();
        assert!(stream.push(7, LogLevel::Debug, b"w"));

        stream.reset_dropped();
        assert_eq!(stream.dropped(), 0);
    }

    #[test]
    fn test_message_truncated_to_max_len() {
        let stream = LogStream::<2>::new();
        let long = [b'a'; MAX_MSG_LEN + 10];

        stream.push(0, LogLevel::Warn, &long);
        let entry = stream.drain().unwrap();
        assert_eq!(entry.len as usize, MAX_MSG_LEN);
    }

    #[test]
    fn test_rt_info_macro() {
        let stream = LogStream::<4>::new();
        crate::rt_info!(stream, 42, "elapsed {}s", 7);

        let entry = stream.drain().unwrap();
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message(), "elapsed 7s");
    }

    #[test]
    fn test_format_entry() {
        let mut entry = LogEntry::EMPTY;
        entry.timestamp_us = 1_234_000;
        entry.level = LogLevel::Error;
        entry.msg[..7].copy_from_slice(b"timeout");
        entry.len = 4;

        let mut buf = [0u8; 128];
        let len = format_entry(&entry, &mut buf);
        let text = core::str::from_utf8(&buf[..len]).unwrap();

        assert_eq!(text, "[   1234000] ERROR: time\n");
    }

    #[test]
    fn test_buf_writer_truncates() {
        let mut buf = [0u8; 4];
        let len = format_to_buffer(&mut buf, format_args!("{}", 123456));
        assert_eq!(&buf[..len], b"1234");
    }

    #[test]
    fn test_concurrent_producers() {
        use std::sync::Arc;
        use std::thread;

        let stream = Arc::new(LogStream::<64>::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let stream = Arc::clone(&stream);
                thread::spawn(move || {
                    for j in 0..10 {
                        let msg = format!("T{}-{}", t, j);
                        stream.push(j, LogLevel::Info, msg.as_bytes());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let mut count = 0;
        while stream.drain().is_some() {
            count += 1;
        }
        assert_eq!(count, 40);
    }
}
