//! Decoding and encoding of URI elements.
//!
//! A "URI element" is any part of the URI that is a sequence of characters
//! which may be percent-encoded and, where not percent-encoded, must come
//! from a restricted character class. Decoding validates against the
//! membership tables in [`character_sets`](crate::character_sets); encoding
//! uses `percent-encoding` [`AsciiSet`]s that mirror those tables exactly
//! (an `AsciiSet` lists the characters that *do* get encoded, so each set
//! below is the ASCII complement of its table).

use crate::character_sets::CharacterSet;
use crate::compat::{String, ToString, Vec};
use crate::error::{ParseError, Result};
use crate::percent_decoder::PercentDecoder;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside RFC 3986 `unreserved`
pub const UNRESERVED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Everything outside `reg-name` (`unreserved` / `sub-delims`)
pub const REG_NAME_SET: &AsciiSet = &UNRESERVED_SET
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Everything outside `userinfo` (`reg-name` plus `:`)
pub const USER_INFO_SET: &AsciiSet = &REG_NAME_SET.remove(b':');

/// Everything outside `pchar` (`userinfo` plus `@`)
pub const PCHAR_SET: &AsciiSet = &USER_INFO_SET.remove(b'@');

/// Everything outside `query`/`fragment` (`pchar` plus `/` and `?`)
pub const FRAGMENT_SET: &AsciiSet = &PCHAR_SET.remove(b'/').remove(b'?');

/// The query encode set: `+` is re-added so it always travels
/// percent-encoded (space-vs-plus ambiguity with some deployed services)
pub const QUERY_SET: &AsciiSet = &FRAGMENT_SET.add(b'+');

/// Check and decode a single URI element.
///
/// Scans `raw` one byte at a time: a `%` starts a two-hex-digit escape fed
/// to a fresh [`PercentDecoder`]; any other byte must be a member of
/// `allowed`. An escape cut short by the end of input contributes nothing.
///
/// # Errors
///
/// [`ParseError::InvalidPercentEncoding`] for a bad hex digit or an escape
/// sequence that does not decode to valid UTF-8; `on_disallowed` for a raw
/// byte outside `allowed`.
pub fn decode_element(
    raw: &str,
    allowed: &CharacterSet,
    on_disallowed: ParseError,
) -> Result<String> {
    let mut decoded: Vec<u8> = Vec::with_capacity(raw.len());
    let mut decoder: Option<PercentDecoder> = None;
    for &b in raw.as_bytes() {
        match decoder.take() {
            Some(mut pec) => match pec.next(b)? {
                Some(byte) => decoded.push(byte),
                None => decoder = Some(pec),
            },
            None => {
                if b == b'%' {
                    decoder = Some(PercentDecoder::new());
                } else if allowed.contains(b) {
                    decoded.push(b);
                } else {
                    return Err(on_disallowed);
                }
            }
        }
    }
    String::from_utf8(decoded).map_err(|_| ParseError::InvalidPercentEncoding)
}

/// Percent-encode a decoded element with the given encode set.
///
/// Total function: bytes in the set (and all non-ASCII bytes) become `%`
/// followed by two uppercase hex digits, everything else passes through.
pub fn encode_element(decoded: &str, encode_set: &'static AsciiSet) -> String {
    utf8_percent_encode(decoded, encode_set).to_string()
}
