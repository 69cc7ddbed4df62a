//! Serial command console
//!
//! Byte-at-a-time line assembly, prefix command matching, fixed replies.
//! Zero heap allocation - all static buffers.

pub mod command;
#[allow(clippy::module_inception)]
pub mod console;
pub mod error;
pub mod line_buffer;
pub mod response;
pub mod stopwatch;

pub use command::Command;
pub use console::Console;
pub use error::ConsoleError;
pub use line_buffer::LineBuffer;
pub use response::Response;
pub use stopwatch::Stopwatch;
