//! Path parsing and dot-segment removal.
//!
//! A path is stored as a vector of decoded segments. An absolute path
//! carries an empty leading segment so that joining the segments with `/`
//! reproduces the leading slash. The empty path is the empty vector, and a
//! bare `/` is the single-element vector of one empty segment.

use crate::character_sets::PCHAR;
use crate::codec::decode_element;
use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};

/// Parse and decode a raw path into its segment representation.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPath`] for a raw character outside `pchar`,
/// or [`ParseError::InvalidPercentEncoding`] for a malformed escape.
pub fn parse_path(raw: &str) -> Result<Vec<String>> {
    match raw {
        "" => Ok(Vec::new()),
        "/" => Ok(Vec::from([String::new()])),
        _ => raw
            .split('/')
            .map(|segment| decode_element(segment, &PCHAR, ParseError::InvalidPath))
            .collect(),
    }
}

/// Whether the path begins at the root.
pub fn is_absolute(path: &[String]) -> bool {
    path.first().is_some_and(String::is_empty)
}

/// Remove `.` and `..` segments, per the RFC 3986 `remove_dot_segments`
/// routine.
///
/// A trailing `.` or `..` keeps the result at a directory level: the output
/// then ends with an empty segment. `..` never pops the root of an absolute
/// path and never pops below an empty relative path.
pub fn remove_dot_segments(path: &mut Vec<String>) {
    let old_path = core::mem::take(path);
    let absolute = is_absolute(&old_path);
    let mut at_directory_level = false;

    for segment in old_path {
        match segment.as_str() {
            "." => at_directory_level = true,
            ".." => {
                at_directory_level = true;
                if !path.is_empty() && (!absolute || path.len() > 1) {
                    path.pop();
                }
            }
            _ => {
                if !at_directory_level || !segment.is_empty() {
                    let is_empty = segment.is_empty();
                    path.push(segment);
                    at_directory_level = is_empty;
                }
            }
        }
    }

    // A walk that ends at a directory level gets its trailing slash back.
    if at_directory_level && path.last().is_some_and(|segment| !segment.is_empty()) {
        path.push(String::new());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn segments(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn test_parse_empty_and_root() {
        assert_eq!(parse_path("").unwrap(), segments(&[]));
        assert_eq!(parse_path("/").unwrap(), segments(&[""]));
    }

    #[test]
    fn test_parse_absolute_and_relative() {
        assert_eq!(parse_path("/a/b/c").unwrap(), segments(&["", "a", "b", "c"]));
        assert_eq!(parse_path("a/b").unwrap(), segments(&["a", "b"]));
        assert_eq!(parse_path("/a/b/").unwrap(), segments(&["", "a", "b", ""]));
    }

    #[test]
    fn test_parse_decodes_segments() {
        assert_eq!(
            parse_path("/foo%20bar/b%2Fz").unwrap(),
            segments(&["", "foo bar", "b/z"])
        );
    }

    #[test]
    fn test_parse_rejects_bad_characters() {
        assert_eq!(parse_path("/a b").unwrap_err(), ParseError::InvalidPath);
        assert_eq!(
            parse_path("/a%GGb").unwrap_err(),
            ParseError::InvalidPercentEncoding
        );
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute(&segments(&["", "a"])));
        assert!(is_absolute(&segments(&[""])));
        assert!(!is_absolute(&segments(&["a", "b"])));
        assert!(!is_absolute(&segments(&[])));
    }

    fn normalized(path: &[&str]) -> Vec<String> {
        let mut path = segments(path);
        remove_dot_segments(&mut path);
        path
    }

    #[test]
    fn test_single_dot_segments() {
        assert_eq!(normalized(&["", "a", ".", "b"]), segments(&["", "a", "b"]));
        assert_eq!(normalized(&["", "a", "."]), segments(&["", "a", ""]));
        assert_eq!(normalized(&[".", "a"]), segments(&["a"]));
    }

    #[test]
    fn test_double_dot_segments() {
        assert_eq!(
            normalized(&["", "a", "b", "..", "c"]),
            segments(&["", "a", "c"])
        );
        assert_eq!(normalized(&["", "a", ".."]), segments(&[""]));
    }

    #[test]
    fn test_double_dot_never_pops_root() {
        assert_eq!(normalized(&["", "..", "a"]), segments(&["", "a"]));
        assert_eq!(normalized(&["", "..", "..", "a"]), segments(&["", "a"]));
    }

    #[test]
    fn test_relative_double_dot() {
        assert_eq!(normalized(&["a", "..", "b"]), segments(&["b"]));
        assert_eq!(normalized(&["..", "a"]), segments(&["a"]));
    }

    #[test]
    fn test_trailing_dot_keeps_directory_level() {
        assert_eq!(
            normalized(&["", "a", "b", ".."]),
            segments(&["", "a", ""])
        );
        assert_eq!(normalized(&["", "a", "b", "."]), segments(&["", "a", "b", ""]));
    }

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(normalized(&["", "a", "b", "c"]), segments(&["", "a", "b", "c"]));
        assert_eq!(normalized(&["a", "b"]), segments(&["a", "b"]));
    }
}
