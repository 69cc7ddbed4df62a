//! Module: config
//!
//! Purpose: Fixed configuration for the stopwatch firmware.
//!
//! The device has one behavior from power-on: no persisted settings,
//! no runtime parameters. Everything here is a compile-time constant or
//! a small `Default` struct consumed once during peripheral setup.
//!
//! Safety: RT-safe. Plain constants, no shared state.

/// Line assembler capacity in bytes. Longer input is consumed but dropped.
pub const LINE_CAPACITY: usize = 20;

/// Carriage return, the only line terminator on input.
pub const TERMINATOR: u8 = b'\r';

/// Tick interrupt rate (one tick per millisecond).
pub const TICK_HZ: u32 = 1000;

/// Ticks accumulated before the elapsed counter advances by one second.
///
/// The sub-unit counter runs 0..=999 and wraps when it would exceed 999.
pub const TICKS_PER_SECOND: u32 = 1000;

/// Elapsed seconds are reported as exactly four digits, modulo this value.
pub const ELAPSED_MODULUS: u32 = 10_000;

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Command link configuration (UART2, 8N1).
///
/// Pin numbers must match the pins handed to the driver in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
    pub rx_pin: u8,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            tx_pin: 17,
            rx_pin: 18,
        }
    }
}

/// Hardware tick timer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimerConfig {
    /// Desired interrupt rate in Hz.
    pub tick_hz: u32,
}

impl TickTimerConfig {
    /// Alarm (reload) count for a timer clocked at `timer_clock_hz`.
    ///
    /// A 1 MHz timer clock at 1 kHz gives 1000 counts, i.e. the counter
    /// runs 0..=999 between alarms. Never returns less than 1.
    pub fn alarm_count(&self, timer_clock_hz: u64) -> u64 {
        if self.tick_hz == 0 {
            return timer_clock_hz.max(1);
        }
        (timer_clock_hz / self.tick_hz as u64).max(1)
    }
}

impl Default for TickTimerConfig {
    fn default() -> Self {
        Self { tick_hz: TICK_HZ }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_count_one_ms() {
        let cfg = TickTimerConfig::default();
        assert_eq!(cfg.alarm_count(1_000_000), 1000);
        assert_eq!(cfg.alarm_count(80_000_000), 80_000);
    }

    #[test]
    fn test_alarm_count_never_zero() {
        let cfg = TickTimerConfig { tick_hz: 1000 };
        assert_eq!(cfg.alarm_count(10), 1);

        let cfg = TickTimerConfig { tick_hz: 0 };
        assert_eq!(cfg.alarm_count(0), 1);
    }

    #[test]
    fn test_serial_defaults() {
        let cfg = SerialConfig::default();
        assert_eq!(cfg.baud_rate, 9600);
    }
}
