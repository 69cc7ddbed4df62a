//! Log output on a dedicated TX-only UART.
//!
//! Drains [`LOG_STREAM`] and writes formatted lines to UART1 on GPIO6,
//! keeping diagnostics off the command link.
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32-S3 GPIO6 (TX) ──────▶ USB-UART RX
//!                              └─▶ PC Serial Monitor
//! ```
//!
//! [`LOG_STREAM`]: crate::log_globals::LOG_STREAM

use crate::logging::{format_entry, format_to_buffer, LogStream};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartTxDriver};

/// Drop counts are reported at most this often.
pub const DROP_REPORT_INTERVAL_US: i64 = 10_000_000;

/// UART configuration for logging.
pub struct UartLoggerConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
}

impl Default for UartLoggerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            tx_pin: 6, // GPIO6 - UART1 TX
        }
    }
}

/// Sink for formatted log lines. Writes are best effort.
pub trait LogSink {
    fn write_line(&mut self, line: &[u8]);
}

/// Drain state: forwards entries and periodically reports drops.
pub struct LogDrain {
    last_drop_report_us: i64,
    buf: [u8; 128],
}

impl LogDrain {
    pub const fn new() -> Self {
        Self {
            last_drop_report_us: 0,
            buf: [0u8; 128],
        }
    }

    /// Forward every pending entry to `sink`, then report drops if due.
    ///
    /// Returns the number of entries written.
    pub fn pump<const N: usize>(
        &mut self,
        stream: &LogStream<N>,
        sink: &mut impl LogSink,
        now_us: i64,
    ) -> usize {
        let mut written = 0;

        while let Some(entry) = stream.drain() {
            let len = format_entry(&entry, &mut self.buf);
            sink.write_line(&self.buf[..len]);
            written += 1;
        }

        if now_us - self.last_drop_report_us >= DROP_REPORT_INTERVAL_US {
            let dropped = stream.dropped();
            if dropped > 0 {
                let len = format_to_buffer(
                    &mut self.buf,
                    format_args!("[WARN] Dropped: {}\n", dropped),
                );
                sink.write_line(&self.buf[..len]);
                stream.reset_dropped();
            }
            self.last_drop_report_us = now_us;
        }

        written
    }
}

impl Default for LogDrain {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize UART1 TX-only for logging output.
#[cfg(target_os = "espidf")]
pub fn init_uart_logger<'d>(
    uart: impl Peripheral<P = esp_idf_svc::hal::uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    config: &UartLoggerConfig,
) -> Result<UartTxDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

#[cfg(target_os = "espidf")]
impl LogSink for UartTxDriver<'_> {
    fn write_line(&mut self, line: &[u8]) {
        let _ = self.write(line);
    }
}

/// UART log consumer task. Never returns.
#[cfg(target_os = "espidf")]
pub fn uart_logger_task(uart: &mut UartTxDriver<'_>) -> ! {
    use crate::log_globals::LOG_STREAM;

    let mut drain = LogDrain::new();

    loop {
        let now = unsafe { esp_idf_svc::sys::esp_timer_get_time() };

        if drain.pump(&LOG_STREAM, uart, now) == 0 {
            unsafe {
                esp_idf_svc::sys::vTaskDelay(10);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    struct VecSink(Vec<String>);

    impl LogSink for VecSink {
        fn write_line(&mut self, line: &[u8]) {
            self.0.push(String::from_utf8_lossy(line).into_owned());
        }
    }

    #[test]
    fn test_pump_formats_entries() {
        let stream = LogStream::<4>::new();
        stream.push(1_000, LogLevel::Info, b"START");
        stream.push(2_000, LogLevel::Info, b"STOP 0001");

        let mut drain = LogDrain::new();
        let mut sink = VecSink(Vec::new());

        assert_eq!(drain.pump(&stream, &mut sink, 0), 2);
        assert_eq!(sink.0[0], "[      1000] INFO: START\n");
        assert!(sink.0[1].contains("STOP 0001"));
    }

    #[test]
    fn test_pump_reports_drops_once_per_interval() {
        let stream = LogStream::<2>::new();
        for _ in 0..5 {
            stream.push(0, LogLevel::Debug, b"x");
        }

        let mut drain = LogDrain::new();
        let mut sink = VecSink(Vec::new());

        drain.pump(&stream, &mut sink, DROP_REPORT_INTERVAL_US);
        assert_eq!(sink.0.len(), 3);
        assert_eq!(sink.0[2], "[WARN] Dropped: 3\n");
        assert_eq!(stream.dropped(), 0);

        stream.push(0, LogLevel::Debug, b"a");
        stream.push(0, LogLevel::Debug, b"b");
        stream.push(0, LogLevel::Debug, b"c");
        drain.pump(&stream, &mut sink, DROP_REPORT_INTERVAL_US + 1);

        // Interval not elapsed: entries forwarded, drop count kept
        assert_eq!(sink.0.len(), 5);
        assert_eq!(stream.dropped(), 1);
    }
}
