//! Command classification
//!
//! Case-sensitive prefix match against two literals, "STOP" tried first.
//! A literal that is a prefix of another must come after it.

/// Recognised command literals, in match order.
const LITERALS: &[(&[u8], Command)] = &[
    (b"STOP", Command::Stop),
    (b"START", Command::Start),
];

/// Classification of a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Restart the stopwatch from zero
    Start,
    /// Report elapsed seconds
    Stop,
    /// Anything else, including an empty line
    Unknown,
}

impl Command {
    /// Classify a line by its prefix.
    ///
    /// Trailing bytes after a recognised literal are ignored, so
    /// `"STOPWATCH"` is [`Command::Stop`].
    pub fn classify(line: &[u8]) -> Self {
        LITERALS
            .iter()
            .find(|(literal, _)| line.starts_with(literal))
            .map(|&(_, cmd)| cmd)
            .unwrap_or(Command::Unknown)
    }

    /// Command name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Start => "START",
            Command::Stop => "STOP",
            Command::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_literals() {
        assert_eq!(Command::classify(b"START"), Command::Start);
        assert_eq!(Command::classify(b"STOP"), Command::Stop);
    }

    #[test]
    fn test_partial_literal_is_unknown() {
        assert_eq!(Command::classify(b"STAR"), Command::Unknown);
        assert_eq!(Command::classify(b"STO"), Command::Unknown);
        assert_eq!(Command::classify(b"ST"), Command::Unknown);
    }
}
