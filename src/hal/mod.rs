//! Hardware Abstraction Layer for the stopwatch.
//!
//! Thin wrappers around ESP-IDF peripherals.
//! Business logic stays in core modules, HAL is just I/O.

pub mod serial;
pub mod timer;

pub use serial::ByteTransport;

#[cfg(target_os = "espidf")]
pub use serial::EspSerial;
#[cfg(target_os = "espidf")]
pub use timer::start_tick_timer;
