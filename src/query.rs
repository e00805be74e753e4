//! Query and fragment parsing.

use crate::character_sets::{QUERY, QUERY_OR_FRAGMENT};
use crate::codec::decode_element;
use crate::compat::String;
use crate::error::{ParseError, Result};

/// Parse the trailing part of a URI string, starting at the first `?` or
/// `#` (the input keeps those delimiters).
///
/// Returns the decoded query and fragment. An empty input means both are
/// absent; a lone delimiter yields the corresponding component present but
/// empty.
///
/// # Errors
///
/// Returns [`ParseError::InvalidQuery`] or [`ParseError::InvalidFragment`]
/// for a disallowed raw character, and
/// [`ParseError::InvalidPercentEncoding`] for a malformed escape. Input
/// that is non-empty but starts with neither delimiter is an invalid query.
pub fn parse_query_and_fragment(raw: &str) -> Result<(Option<String>, Option<String>)> {
    let (rest, fragment) = match memchr::memchr(b'#', raw.as_bytes()) {
        Some(delimiter) => (
            &raw[..delimiter],
            Some(decode_element(
                &raw[delimiter + 1..],
                &QUERY_OR_FRAGMENT,
                ParseError::InvalidFragment,
            )?),
        ),
        None => (raw, None),
    };

    let query = if rest.is_empty() {
        None
    } else {
        let Some(query) = rest.strip_prefix('?') else {
            return Err(ParseError::InvalidQuery);
        };
        Some(decode_element(query, &QUERY, ParseError::InvalidQuery)?)
    };

    Ok((query, fragment))
}
