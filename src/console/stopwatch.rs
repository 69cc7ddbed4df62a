//! Command dispatcher: applies a [`Command`] to the tick counters.

use crate::logging::LogStream;
use crate::tick::TickAccumulator;
use crate::{rt_debug, rt_info};

use super::{Command, Response};

/// Stopwatch actions over the shared tick counters.
///
/// Never stops the tick timer: START only moves the zero point,
/// STOP only reads.
pub struct Stopwatch<'a, const N: usize> {
    ticks: &'a TickAccumulator,
    log: &'a LogStream<N>,
}

impl<'a, const N: usize> Stopwatch<'a, N> {
    pub const fn new(ticks: &'a TickAccumulator, log: &'a LogStream<N>) -> Self {
        Self { ticks, log }
    }

    /// Perform `cmd` and return the reply to send.
    pub fn execute(&self, cmd: Command) -> Response {
        let now = self.ticks.timestamp_us();

        match cmd {
            Command::Start => {
                self.ticks.reset();
                rt_info!(self.log, now, "START: counter reset");
                Response::Started
            }
            Command::Stop => {
                let secs = self.ticks.elapsed();
                rt_info!(self.log, now, "STOP: {}s elapsed", secs);
                Response::Elapsed(secs)
            }
            Command::Unknown => {
                rt_debug!(self.log, now, "unrecognised line");
                Response::Error
            }
        }
    }

    pub fn ticks(&self) -> &'a TickAccumulator {
        self.ticks
    }

    pub fn log(&self) -> &'a LogStream<N> {
        self.log
    }
}
