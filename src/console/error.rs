//! Console error types
//!
//! The protocol has a single user-visible error (`ERROR\n`), which is a
//! [`Response`](super::Response), not an error. These cover transport
//! failures that end a [`Console::serve`](super::Console::serve) call.

/// Transport failure while serving the command link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError<E> {
    /// E01: Receiving a byte failed
    Receive(E),
    /// E02: Sending a response failed
    Send(E),
}

impl<E> ConsoleError<E> {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Receive(_) => "E01",
            Self::Send(_) => "E02",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Receive(_) => "receive failed",
            Self::Send(_) => "send failed",
        }
    }

    /// Underlying driver error
    pub fn inner(&self) -> &E {
        match self {
            Self::Receive(e) | Self::Send(e) => e,
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for ConsoleError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {} ({:?})", self.code(), self.message(), self.inner())
    }
}
