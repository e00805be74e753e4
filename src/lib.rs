//! `uricore` is a parser, resolver and serializer for RFC 3986 URIs and
//! relative references.
//!
//! Parsing validates each component against its RFC 3986 character class,
//! decodes percent-encoding and normalizes case where the RFC makes it
//! insignificant. The parsed [`Uri`] is a plain value type: compare it,
//! hash it, pick components apart, edit them, resolve references against a
//! base and render the result back to text.
//!
//! ```
//! use uricore::Uri;
//!
//! # fn main() -> Result<(), uricore::ParseError> {
//! let base = Uri::parse("http://www.example.com/a/b?query#fragment")?;
//! assert_eq!(base.scheme(), Some("http"));
//! assert_eq!(base.host(), "www.example.com");
//!
//! let relative = Uri::parse("../c")?;
//! assert_eq!(base.resolve(&relative).to_string(), "http://www.example.com/c");
//! # Ok(())
//! # }
//! ```
//!
//! The crate is `no_std` compatible (requires `alloc`) when built without
//! the default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod authority;
mod character_sets;
mod codec;
mod compat;
mod error;
mod ipv4;
mod ipv6;
mod path;
mod percent_decoder;
mod query;
mod scheme;
mod uri;

pub use error::{ParseError, Result};
pub use uri::Uri;
