//! Global log stream instance.
//!
//! Producers: console loop and startup code.
//! Consumer: the log drain task (UART1 on target, stderr on host).

use crate::logging::LogStream;

/// System log stream.
pub static LOG_STREAM: LogStream = LogStream::new();
