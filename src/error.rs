/// Errors that can occur during URI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid scheme format
    InvalidScheme,
    /// Invalid percent-encoded escape sequence
    InvalidPercentEncoding,
    /// Invalid character in user information
    InvalidUserInfo,
    /// Invalid host format
    InvalidHost,
    /// Invalid port number
    InvalidPort,
    /// Invalid character in a path segment
    InvalidPath,
    /// Invalid character in the query
    InvalidQuery,
    /// Invalid character in the fragment
    InvalidFragment,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::InvalidUserInfo => "Invalid user information",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::InvalidPath => "Invalid path",
            Self::InvalidQuery => "Invalid query",
            Self::InvalidFragment => "Invalid fragment",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URI parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
