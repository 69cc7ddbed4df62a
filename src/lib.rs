//! # UART Stopwatch
//!
//! Serial-controlled stopwatch driven by a 1 ms hardware timer.
//!
//! ## Architecture
//!
//! ```text
//! Timer ISR ──tick()──▶ TickAccumulator ◀──reset()/elapsed()── Stopwatch
//!                                                                 ▲
//! UART RX ──byte──▶ Console (LineBuffer) ──Command──────────────┘
//!                          │
//! UART TX ◀──Response──────┘
//! ```
//!
//! The counters are the only state shared between interrupt and
//! foreground context, and they are accessed through atomics only.
//! Lines are handled one at a time: a reply is fully sent before the
//! next byte is read.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod hal;
pub mod log_globals;
pub mod logging;
pub mod tick;
pub mod uart_logger;

pub use console::{Command, Console, ConsoleError, LineBuffer, Response, Stopwatch};
pub use hal::ByteTransport;
pub use log_globals::LOG_STREAM;
pub use tick::{TickAccumulator, TickSnapshot};
