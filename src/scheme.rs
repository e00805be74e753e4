use crate::character_sets::{ALPHA, SCHEME_TRAILING};
use crate::compat::String;
use crate::error::{ParseError, Result};

/// Split off and validate the scheme of a URI string.
///
/// Returns the lowercased scheme (`None` for a relative reference) and the
/// remainder after the `:` delimiter.
///
/// # Errors
///
/// Returns [`ParseError::InvalidScheme`] if the candidate scheme is empty,
/// does not start with a letter, or contains a character outside
/// ALPHA / DIGIT / `+` / `-` / `.`.
pub fn parse_scheme(uri_string: &str) -> Result<(Option<String>, &str)> {
    let bytes = uri_string.as_bytes();

    // Limit the search window so a ':' inside the authority or path is not
    // mistaken for the scheme delimiter.
    let window = memchr::memchr(b'/', bytes).unwrap_or(bytes.len());
    let Some(scheme_end) = memchr::memchr(b':', &bytes[..window]) else {
        return Ok((None, uri_string));
    };

    let scheme = &uri_string[..scheme_end];
    let mut scheme_bytes = scheme.bytes();
    let Some(first) = scheme_bytes.next() else {
        return Err(ParseError::InvalidScheme);
    };
    if !ALPHA.contains(first) || !scheme_bytes.all(|c| SCHEME_TRAILING.contains(c)) {
        return Err(ParseError::InvalidScheme);
    }

    Ok((
        Some(scheme.to_ascii_lowercase()),
        &uri_string[scheme_end + 1..],
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_scheme() {
        let (scheme, rest) = parse_scheme("http://example.com").unwrap();
        assert_eq!(scheme.as_deref(), Some("http"));
        assert_eq!(rest, "//example.com");
    }

    #[test]
    fn test_scheme_is_lowercased() {
        let (scheme, _) = parse_scheme("HTTP://example.com").unwrap();
        assert_eq!(scheme.as_deref(), Some("http"));
        let (scheme, _) = parse_scheme("MiXeD://x").unwrap();
        assert_eq!(scheme.as_deref(), Some("mixed"));
    }

    #[test]
    fn test_no_scheme() {
        let (scheme, rest) = parse_scheme("//example.com/a").unwrap();
        assert_eq!(scheme, None);
        assert_eq!(rest, "//example.com/a");

        let (scheme, rest) = parse_scheme("relative/path").unwrap();
        assert_eq!(scheme, None);
        assert_eq!(rest, "relative/path");
    }

    #[test]
    fn test_colon_after_slash_is_not_a_scheme() {
        // The ':' belongs to the path, not a scheme.
        let (scheme, rest) = parse_scheme("foo/bar:baz").unwrap();
        assert_eq!(scheme, None);
        assert_eq!(rest, "foo/bar:baz");
    }

    #[test]
    fn test_scheme_with_extra_colons() {
        let (scheme, rest) = parse_scheme("urn:example:animal").unwrap();
        assert_eq!(scheme.as_deref(), Some("urn"));
        assert_eq!(rest, "example:animal");
    }

    #[test]
    fn test_empty_scheme_fails() {
        assert_eq!(
            parse_scheme("://example.com").unwrap_err(),
            ParseError::InvalidScheme
        );
    }

    #[test]
    fn test_scheme_must_start_with_letter() {
        assert_eq!(
            parse_scheme("1http://x").unwrap_err(),
            ParseError::InvalidScheme
        );
        assert_eq!(parse_scheme("+a:x").unwrap_err(), ParseError::InvalidScheme);
    }

    #[test]
    fn test_scheme_trailing_characters() {
        let (scheme, _) = parse_scheme("a+b-c.d:x").unwrap();
        assert_eq!(scheme.as_deref(), Some("a+b-c.d"));
        assert_eq!(
            parse_scheme("h~ttp://x").unwrap_err(),
            ParseError::InvalidScheme
        );
    }
}
