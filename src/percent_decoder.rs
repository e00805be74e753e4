//! Percent-encoded escape sequence decoder.

use crate::error::{ParseError, Result};

/// Convert one hexadecimal digit to its value.
const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Decoder for a single `pct-encoded` sequence (the two hex digits
/// following a `%`).
///
/// The decoder is a two-state machine fed one byte at a time; a fresh one is
/// created for every escape sequence.
#[derive(Debug, Clone, Copy)]
pub struct PercentDecoder {
    state: State,
}

#[derive(Debug, Clone, Copy)]
enum State {
    /// Expecting the first (high nibble) hex digit
    HighNibble,
    /// Expecting the second (low nibble) hex digit
    LowNibble { high: u8 },
}

impl PercentDecoder {
    pub fn new() -> Self {
        Self {
            state: State::HighNibble,
        }
    }

    /// Feed the next raw byte to the decoder.
    ///
    /// Returns `Ok(Some(byte))` once both digits have been consumed, and
    /// `Ok(None)` after the first digit.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPercentEncoding`] if the byte is not a
    /// hexadecimal digit.
    pub fn next(&mut self, c: u8) -> Result<Option<u8>> {
        let digit = hex_value(c).ok_or(ParseError::InvalidPercentEncoding)?;
        match self.state {
            State::HighNibble => {
                self.state = State::LowNibble { high: digit };
                Ok(None)
            }
            State::LowNibble { high } => Ok(Some((high << 4) | digit)),
        }
    }
}

impl Default for PercentDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_uppercase() {
        let mut decoder = PercentDecoder::new();
        assert_eq!(decoder.next(b'2').unwrap(), None);
        assert_eq!(decoder.next(b'F').unwrap(), Some(b'/'));
    }

    #[test]
    fn test_decode_lowercase() {
        let mut decoder = PercentDecoder::new();
        assert_eq!(decoder.next(b'2').unwrap(), None);
        assert_eq!(decoder.next(b'f').unwrap(), Some(b'/'));
    }

    #[test]
    fn test_decode_high_byte() {
        let mut decoder = PercentDecoder::new();
        assert_eq!(decoder.next(b'f').unwrap(), None);
        assert_eq!(decoder.next(b'f').unwrap(), Some(0xFF));
    }

    #[test]
    fn test_invalid_first_digit() {
        let mut decoder = PercentDecoder::new();
        assert_eq!(
            decoder.next(b'G').unwrap_err(),
            ParseError::InvalidPercentEncoding
        );
    }

    #[test]
    fn test_invalid_second_digit() {
        let mut decoder = PercentDecoder::new();
        assert_eq!(decoder.next(b'4').unwrap(), None);
        assert_eq!(
            decoder.next(b'Z').unwrap_err(),
            ParseError::InvalidPercentEncoding
        );
    }
}
