//! Main console struct: line assembly and the serve loop

use core::convert::Infallible;

use crate::config::TERMINATOR;
use crate::hal::ByteTransport;
use crate::rt_warn;

use super::{Command, ConsoleError, LineBuffer, Response, Stopwatch};

/// Line assembler feeding the stopwatch dispatcher.
pub struct Console<'a, const N: usize> {
    line: LineBuffer,
    stopwatch: Stopwatch<'a, N>,
}

impl<'a, const N: usize> Console<'a, N> {
    /// Create new console
    pub const fn new(stopwatch: Stopwatch<'a, N>) -> Self {
        Self {
            line: LineBuffer::new(),
            stopwatch,
        }
    }

    /// Process a single input byte
    ///
    /// Returns the response to send once a terminator completes a line,
    /// None if more input is needed.
    pub fn process_byte(&mut self, byte: u8) -> Option<Response> {
        if byte != TERMINATOR {
            self.line.push(byte);
            return None;
        }

        if self.line.dropped() > 0 {
            rt_warn!(
                self.stopwatch.log(),
                self.stopwatch.ticks().timestamp_us(),
                "line truncated, {} bytes dropped",
                self.line.dropped()
            );
        }

        let cmd = Command::classify(self.line.as_bytes());
        let response = self.stopwatch.execute(cmd);
        self.line.clear();
        Some(response)
    }

    /// Read, assemble, dispatch and reply, forever.
    ///
    /// Each line is answered in full before the next byte is read.
    /// Returns only if the transport fails.
    pub fn serve<T: ByteTransport>(
        &mut self,
        transport: &mut T,
    ) -> Result<Infallible, ConsoleError<T::Error>> {
        loop {
            let byte = transport.receive().map_err(ConsoleError::Receive)?;

            if let Some(response) = self.process_byte(byte) {
                transport
                    .send_all(response.render().as_bytes())
                    .map_err(ConsoleError::Send)?;
            }
        }
    }

    /// Bytes buffered for the current line
    pub fn pending(&self) -> &[u8] {
        self.line.as_bytes()
    }
}
