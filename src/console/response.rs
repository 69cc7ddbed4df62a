//! Wire responses

use core::fmt;

use crate::config::ELAPSED_MODULUS;

/// Largest rendered response ("9999 CEK.\n").
pub const MAX_RESPONSE_LEN: usize = 10;

/// Reply sent for one completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// `START\n`
    Started,
    /// `DDDD CEK.\n`, elapsed seconds modulo 10000, zero padded
    Elapsed(u32),
    /// `ERROR\n`
    Error,
}

impl Response {
    /// Render into a fixed buffer, ready for the transport.
    pub fn render(&self) -> Rendered {
        let mut out = Rendered {
            buf: [0u8; MAX_RESPONSE_LEN],
            len: 0,
        };
        let _ = fmt::write(&mut out, format_args!("{}", self));
        out
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => f.write_str("START\n"),
            Self::Elapsed(secs) => write!(f, "{:04} CEK.\n", secs % ELAPSED_MODULUS),
            Self::Error => f.write_str("ERROR\n"),
        }
    }
}

/// Rendered response bytes
pub struct Rendered {
    buf: [u8; MAX_RESPONSE_LEN],
    len: usize,
}

impl Rendered {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Write for Rendered {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.len + bytes.len();
        if end > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_four_digits() {
        assert_eq!(Response::Elapsed(0).render().as_bytes(), b"0000 CEK.\n");
        assert_eq!(Response::Elapsed(7).render().as_bytes(), b"0007 CEK.\n");
        assert_eq!(Response::Elapsed(9999).render().as_bytes(), b"9999 CEK.\n");
    }

    #[test]
    fn test_elapsed_truncates_above_four_digits() {
        assert_eq!(Response::Elapsed(10_000).render().as_bytes(), b"0000 CEK.\n");
        assert_eq!(Response::Elapsed(123_456).render().as_bytes(), b"3456 CEK.\n");
        assert_eq!(Response::Elapsed(u32::MAX).render().as_bytes(), b"7295 CEK.\n");
    }

    #[test]
    fn test_fixed_responses() {
        assert_eq!(Response::Started.render().as_bytes(), b"START\n");
        assert_eq!(Response::Error.render().as_bytes(), b"ERROR\n");
    }
}
