//! The [`Uri`] value type.

use crate::authority::split_and_parse_authority;
use crate::codec::{
    FRAGMENT_SET, PCHAR_SET, QUERY_SET, REG_NAME_SET, USER_INFO_SET, encode_element,
};
use crate::compat::{String, Vec};
use crate::error::Result;
use crate::ipv6::is_valid_ipv6;
use crate::path::{is_absolute, parse_path, remove_dot_segments};
use crate::query::parse_query_and_fragment;
use crate::scheme::parse_scheme;

/// A parsed RFC 3986 URI or relative reference.
///
/// All components are stored decoded; percent-encoding exists only in the
/// textual form, applied on [`parse`](Uri::parse) and re-applied on
/// [`Display`](core::fmt::Display). The scheme and any reg-name host are
/// normalized to lowercase at parse time, so two equal `Uri` values are
/// equivalent URIs regardless of the case or escaping of the strings they
/// were parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: Option<String>,
    user_info: String,
    host: String,
    port: Option<u16>,
    path: Vec<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl Uri {
    /// An empty relative reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URI or relative reference from its textual form.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`](crate::ParseError) variant naming the
    /// first component found to be malformed.
    pub fn parse(uri_string: &str) -> Result<Self> {
        let (scheme, rest) = parse_scheme(uri_string)?;

        let trailer_start =
            memchr::memchr2(b'?', b'#', rest.as_bytes()).unwrap_or(rest.len());
        let (authority, raw_path) = split_and_parse_authority(&rest[..trailer_start])?;
        let path = parse_path(raw_path)?;
        let (query, fragment) = parse_query_and_fragment(&rest[trailer_start..])?;

        let mut uri = Self {
            scheme,
            user_info: authority.user_info,
            host: authority.host,
            port: authority.port,
            path,
            query,
            fragment,
        };
        // An authority roots the path: empty becomes "/".
        if uri.has_authority() && uri.path.is_empty() {
            uri.path.push(String::new());
        }
        Ok(uri)
    }

    /// The lowercased scheme, or `None` for a relative reference.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The decoded user information; empty when absent.
    #[must_use]
    pub fn user_info(&self) -> &str {
        &self.user_info
    }

    /// The decoded host; empty when absent. Reg-names are lowercased,
    /// IP literals are stored without their brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The decoded path segments.
    ///
    /// An absolute path starts with an empty segment; `["", ""]` and
    /// `[""]` both render as `/`, and the empty slice is the empty path.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The decoded query, if one is present. `Some("")` is a present but
    /// empty query, distinct from `None`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The decoded fragment, if one is present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether this is a relative reference (has no scheme).
    #[must_use]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_none()
    }

    /// Whether the path does not begin at the root.
    #[must_use]
    pub fn has_relative_path(&self) -> bool {
        !is_absolute(&self.path)
    }

    fn has_authority(&self) -> bool {
        !self.host.is_empty() || !self.user_info.is_empty() || self.port.is_some()
    }

    /// Replace the scheme. The empty string clears it, turning the value
    /// into a relative reference. The new scheme is not validated.
    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        let scheme = scheme.into();
        self.scheme = if scheme.is_empty() { None } else { Some(scheme) };
    }

    /// Replace the user information with an already-decoded value.
    pub fn set_user_info(&mut self, user_info: impl Into<String>) {
        self.user_info = user_info.into();
    }

    /// Replace the host with an already-decoded value (IP literals go in
    /// without brackets).
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = Some(port);
    }

    pub fn clear_port(&mut self) {
        self.port = None;
    }

    /// Replace the path segments with already-decoded values.
    pub fn set_path<I>(&mut self, path: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
    }

    /// Replace the query with an already-decoded value.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = Some(query.into());
    }

    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Replace the fragment with an already-decoded value.
    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = Some(fragment.into());
    }

    pub fn clear_fragment(&mut self) {
        self.fragment = None;
    }

    /// Remove `.` and `..` segments from the path, in place.
    pub fn normalize_path(&mut self) {
        remove_dot_segments(&mut self.path);
    }

    fn copy_authority_from(&mut self, other: &Self) {
        self.user_info.clone_from(&other.user_info);
        self.host.clone_from(&other.host);
        self.port = other.port;
    }

    /// Resolve a (usually relative) reference against this base, per the
    /// RFC 3986 section 5.2.2 transformation.
    ///
    /// The result's dot segments are removed; the fragment always comes
    /// from the reference. The base should be an absolute URI for the
    /// result to be one.
    #[must_use]
    pub fn resolve(&self, relative_reference: &Self) -> Self {
        let mut target = Self::new();

        if relative_reference.scheme.is_some() {
            target.scheme.clone_from(&relative_reference.scheme);
            target.copy_authority_from(relative_reference);
            target.path.clone_from(&relative_reference.path);
            remove_dot_segments(&mut target.path);
            target.query.clone_from(&relative_reference.query);
        } else {
            target.scheme.clone_from(&self.scheme);
            if relative_reference.has_authority() {
                target.copy_authority_from(relative_reference);
                target.path.clone_from(&relative_reference.path);
                remove_dot_segments(&mut target.path);
                target.query.clone_from(&relative_reference.query);
            } else {
                target.copy_authority_from(self);
                if relative_reference.path.is_empty() {
                    target.path.clone_from(&self.path);
                    // Only a non-empty query in the reference overrides
                    // the base's query here.
                    if relative_reference
                        .query
                        .as_deref()
                        .is_some_and(|query| !query.is_empty())
                    {
                        target.query.clone_from(&relative_reference.query);
                    } else {
                        target.query.clone_from(&self.query);
                    }
                } else {
                    if is_absolute(&relative_reference.path) {
                        target.path.clone_from(&relative_reference.path);
                    } else {
                        // Merge: the reference replaces the last segment
                        // of the base path.
                        target.path.clone_from(&self.path);
                        if target.path.len() > 1 {
                            target.path.pop();
                        }
                        target
                            .path
                            .extend(relative_reference.path.iter().cloned());
                    }
                    remove_dot_segments(&mut target.path);
                    target.query.clone_from(&relative_reference.query);
                }
            }
        }
        target.fragment.clone_from(&relative_reference.fragment);

        target
    }
}

impl core::fmt::Display for Uri {
    /// Render the textual form, percent-encoding each component with its
    /// own encode set.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if self.has_authority() {
            f.write_str("//")?;
            if !self.user_info.is_empty() {
                write!(f, "{}@", encode_element(&self.user_info, USER_INFO_SET))?;
            }
            if is_valid_ipv6(self.host.as_bytes()) {
                write!(f, "[{}]", self.host.to_ascii_lowercase())?;
            } else {
                f.write_str(&encode_element(&self.host, REG_NAME_SET))?;
            }
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }
        if self.path.len() == 1 && self.path[0].is_empty() {
            f.write_str("/")?;
        } else {
            let mut first = true;
            for segment in &self.path {
                if !first {
                    f.write_str("/")?;
                }
                first = false;
                f.write_str(&encode_element(segment, PCHAR_SET))?;
            }
        }
        if let Some(query) = &self.query {
            write!(f, "?{}", encode_element(query, QUERY_SET))?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", encode_element(fragment, FRAGMENT_SET))?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Uri {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
