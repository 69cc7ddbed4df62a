//! UART Stopwatch - Main entry point
//!
//! On ESP-IDF:
//! 1. Start the log drain on UART1
//! 2. Start the 1 kHz tick timer
//! 3. Serve the command link on UART2 forever
//!
//! On the host the same console runs over stdin/stdout, with a thread
//! standing in for the timer interrupt:
//!
//! ```text
//! ( printf 'START\r' ; sleep 3 ; printf 'STOP\r' ) | stopwatch
//! ```

use uart_stopwatch::TickAccumulator;

static TICKS: TickAccumulator = TickAccumulator::new();

#[cfg(target_os = "espidf")]
fn main() -> Result<(), esp_idf_svc::sys::EspError> {
    firmware::run()
}

#[cfg(not(target_os = "espidf"))]
fn main() -> std::io::Result<()> {
    host::run()
}

#[cfg(target_os = "espidf")]
mod firmware {
    use esp_idf_svc::hal::delay::FreeRtos;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::sys::EspError;

    use uart_stopwatch::config::{SerialConfig, TickTimerConfig, VERSION};
    use uart_stopwatch::hal::{start_tick_timer, EspSerial};
    use uart_stopwatch::uart_logger::{init_uart_logger, uart_logger_task, UartLoggerConfig};
    use uart_stopwatch::{rt_error, rt_info, Console, Stopwatch, LOG_STREAM};

    use super::TICKS;

    pub fn run() -> Result<(), EspError> {
        // Initialize ESP-IDF
        esp_idf_svc::sys::link_patches();

        let peripherals = Peripherals::take()?;

        let mut log_uart = init_uart_logger(
            peripherals.uart1,
            peripherals.pins.gpio6,
            &UartLoggerConfig::default(),
        )?;
        std::thread::spawn(move || uart_logger_task(&mut log_uart));

        // Dropping the driver would stop the interrupt
        let _tick_timer = start_tick_timer(peripherals.timer00, &TICKS, &TickTimerConfig::default())?;

        let mut serial = EspSerial::new(
            peripherals.uart2,
            peripherals.pins.gpio17,
            peripherals.pins.gpio18,
            &SerialConfig::default(),
        )?;

        rt_info!(LOG_STREAM, TICKS.timestamp_us(), "{} ready", VERSION);

        let mut console = Console::new(Stopwatch::new(&TICKS, &LOG_STREAM));

        loop {
            match console.serve(&mut serial) {
                Ok(never) => match never {},
                Err(err) => {
                    rt_error!(LOG_STREAM, TICKS.timestamp_us(), "{}", err);
                    FreeRtos::delay_ms(10);
                }
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
mod host {
    use std::io::{self, Read, Write};
    use std::thread;
    use std::time::{Duration, Instant};

    use uart_stopwatch::config::{TERMINATOR, TICK_HZ, VERSION};
    use uart_stopwatch::uart_logger::{LogDrain, LogSink};
    use uart_stopwatch::{rt_info, ByteTransport, Console, Stopwatch, LOG_STREAM};

    use super::TICKS;

    /// stdin/stdout as the command link. LF is read as CR so the
    /// simulator works from a line-buffered terminal.
    struct StdioTransport {
        input: io::Bytes<io::StdinLock<'static>>,
        output: io::Stdout,
    }

    impl ByteTransport for StdioTransport {
        type Error = io::Error;

        fn send(&mut self, byte: u8) -> io::Result<()> {
            self.output.write_all(&[byte])?;
            self.output.flush()
        }

        fn receive(&mut self) -> io::Result<u8> {
            match self.input.next() {
                Some(Ok(b'\n')) => Ok(TERMINATOR),
                Some(result) => result,
                None => Err(io::ErrorKind::UnexpectedEof.into()),
            }
        }
    }

    struct StderrSink;

    impl LogSink for StderrSink {
        fn write_line(&mut self, line: &[u8]) {
            let _ = io::stderr().write_all(line);
        }
    }

    /// Catch-up ticker: issues one tick per elapsed millisecond of wall time.
    fn spawn_ticker(start: Instant) {
        thread::spawn(move || {
            let mut issued: u64 = 0;
            loop {
                let due = start.elapsed().as_millis() as u64 * TICK_HZ as u64 / 1000;
                while issued < due {
                    TICKS.tick();
                    issued += 1;
                }
                thread::sleep(Duration::from_millis(1));
            }
        });
    }

    fn spawn_log_drain(start: Instant) {
        thread::spawn(move || {
            let mut drain = LogDrain::new();
            let mut sink = StderrSink;
            loop {
                let now_us = start.elapsed().as_micros() as i64;
                if drain.pump(&LOG_STREAM, &mut sink, now_us) == 0 {
                    thread::sleep(Duration::from_millis(10));
                }
            }
        });
    }

    pub fn run() -> io::Result<()> {
        let start = Instant::now();
        spawn_ticker(start);
        spawn_log_drain(start);

        rt_info!(LOG_STREAM, TICKS.timestamp_us(), "{} ready (host)", VERSION);

        let mut transport = StdioTransport {
            input: io::stdin().lock().bytes(),
            output: io::stdout(),
        };
        let mut console = Console::new(Stopwatch::new(&TICKS, &LOG_STREAM));

        let err = match console.serve(&mut transport) {
            Ok(never) => match never {},
            Err(err) => err,
        };

        // Let the drain flush what the last lines produced
        thread::sleep(Duration::from_millis(50));

        match err.inner().kind() {
            io::ErrorKind::UnexpectedEof => Ok(()),
            kind => Err(io::Error::new(kind, err.message())),
        }
    }
}
