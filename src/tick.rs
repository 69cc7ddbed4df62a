//! Millisecond tick accumulator shared between the timer ISR and the console.
//!
//! # Contexts
//!
//! ```text
//! Timer ISR (1 kHz)        TickAccumulator          Console loop
//! ─────────────────        ───────────────          ────────────
//!
//! tick() ───────────────▶ sub_ticks  (0..=999)
//!                          elapsed    ◀──────────── reset() on START
//!                                     ──────────▶   elapsed() on STOP
//! ```
//!
//! Every access is a single atomic operation. The ISR is the only writer of
//! `sub_ticks`; `elapsed` has two writers (ISR increment, console reset),
//! both single RMW/store operations, so no reader sees a torn value and a
//! reset racing an increment resolves to one of the two orders.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::TICKS_PER_SECOND;

/// Free-running stopwatch counters.
///
/// # Usage
///
/// ```ignore
/// static TICKS: TickAccumulator = TickAccumulator::new();
///
/// // In the 1 ms timer ISR:
/// TICKS.tick();
///
/// // In the console loop:
/// TICKS.reset();
/// let seconds = TICKS.elapsed();
/// ```
pub struct TickAccumulator {
    /// Whole seconds since the last reset.
    elapsed: AtomicU32,

    /// Ticks within the current second. ISR-private.
    sub_ticks: AtomicU32,

    /// Ticks since boot (never reset). Used for log timestamps.
    total: AtomicU32,
}

impl TickAccumulator {
    /// Create zeroed counters.
    pub const fn new() -> Self {
        Self {
            elapsed: AtomicU32::new(0),
            sub_ticks: AtomicU32::new(0),
            total: AtomicU32::new(0),
        }
    }

    /// Account for one timer period.
    ///
    /// ISR-safe: never blocks, never logs.
    #[inline]
    pub fn tick(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);

        // Only the ISR writes sub_ticks, so load + store cannot lose updates.
        let sub = self.sub_ticks.load(Ordering::Relaxed) + 1;
        if sub >= TICKS_PER_SECOND {
            self.sub_ticks.store(0, Ordering::Relaxed);
            self.elapsed.fetch_add(1, Ordering::AcqRel);
        } else {
            self.sub_ticks.store(sub, Ordering::Relaxed);
        }
    }

    /// Restart the stopwatch from zero.
    ///
    /// The sub-second phase is left alone, so the first second after a
    /// reset may be short by up to 999 ticks.
    #[inline]
    pub fn reset(&self) {
        self.elapsed.store(0, Ordering::Release);
    }

    /// Whole seconds since the last reset.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed.load(Ordering::Acquire)
    }

    /// Ticks within the current second.
    #[inline]
    pub fn sub_ticks(&self) -> u32 {
        self.sub_ticks.load(Ordering::Relaxed)
    }

    /// Ticks since boot, wrapping at `u32::MAX` (about 49 days).
    #[inline]
    pub fn total_ticks(&self) -> u32 {
        self.total.load(Ordering::Relaxed)
    }

    /// Microsecond timestamp derived from the tick count, for log entries.
    #[inline]
    pub fn timestamp_us(&self) -> i64 {
        self.total_ticks() as i64 * (1_000_000 / crate::config::TICK_HZ as i64)
    }

    /// Get a snapshot of all counters.
    #[inline]
    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            elapsed: self.elapsed(),
            sub_ticks: self.sub_ticks(),
            total_ticks: self.total_ticks(),
        }
    }
}

impl Default for TickAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter values at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSnapshot {
    pub elapsed: u32,
    pub sub_ticks: u32,
    pub total_ticks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_boundary() {
        let ticks = TickAccumulator::new();

        for _ in 0..999 {
            ticks.tick();
        }
        assert_eq!(ticks.elapsed(), 0);
        assert_eq!(ticks.sub_ticks(), 999);

        ticks.tick();
        assert_eq!(ticks.elapsed(), 1);
        assert_eq!(ticks.sub_ticks(), 0);
        assert_eq!(ticks.total_ticks(), 1000);
    }

    #[test]
    fn test_reset_keeps_phase() {
        let ticks = TickAccumulator::new();

        for _ in 0..2500 {
            ticks.tick();
        }
        ticks.reset();

        let snap = ticks.snapshot();
        assert_eq!(snap.elapsed, 0);
        assert_eq!(snap.sub_ticks, 500);
        assert_eq!(snap.total_ticks, 2500);

        // 500 more ticks complete the running second
        for _ in 0..500 {
            ticks.tick();
        }
        assert_eq!(ticks.elapsed(), 1);
    }

    #[test]
    fn test_timestamp_us() {
        let ticks = TickAccumulator::new();
        for _ in 0..3 {
            ticks.tick();
        }
        assert_eq!(ticks.timestamp_us(), 3000);
    }
}
