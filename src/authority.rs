//! Authority parsing: `userinfo@host:port`.

use crate::character_sets::{HEXDIG, IPV_FUTURE_TAIL, REG_NAME, USER_INFO};
use crate::codec::decode_element;
use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};
use crate::ipv6::is_valid_ipv6;
use crate::percent_decoder::PercentDecoder;

/// The decoded pieces of an authority component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorityComponents {
    pub user_info: String,
    pub host: String,
    pub port: Option<u16>,
}

/// Split off the authority (if the input starts with `//`) and parse it.
///
/// Returns the parsed authority and the remainder, which is the path. When
/// no `//` prefix is present the whole input is the path and the authority
/// is empty.
pub fn split_and_parse_authority(
    authority_and_path: &str,
) -> Result<(AuthorityComponents, &str)> {
    let Some(rest) = authority_and_path.strip_prefix("//") else {
        return Ok((AuthorityComponents::default(), authority_and_path));
    };
    let authority_end = memchr::memchr(b'/', rest.as_bytes()).unwrap_or(rest.len());
    let authority = parse_authority(&rest[..authority_end])?;
    Ok((authority, &rest[authority_end..]))
}

/// States of the host and port scanner.
#[derive(Debug, Clone, Copy)]
enum HostState {
    /// Nothing consumed; decides between an IP literal and a reg-name
    FirstCharacter,
    /// Inside a reg-name host
    NotIpLiteral,
    /// Inside a `pct-encoded` escape of a reg-name host
    PercentEncoded(PercentDecoder),
    /// Just consumed `[`; decides between IPv6 and IPvFuture
    IpLiteral,
    /// Inside a bracketed IPv6 address
    Ipv6Address,
    /// Inside the version part of an IPvFuture literal
    IpvFutureNumber,
    /// Inside the body of an IPvFuture literal, after the dot
    IpvFutureBody,
    /// Just consumed the closing `]`; only `:` may follow
    GarbageCheck,
    /// Consumed the port delimiter
    Port,
}

fn parse_authority(authority: &str) -> Result<AuthorityComponents> {
    let (user_info, host_and_port) = match memchr::memchr(b'@', authority.as_bytes()) {
        Some(delimiter) => (
            decode_element(
                &authority[..delimiter],
                &USER_INFO,
                ParseError::InvalidUserInfo,
            )?,
            &authority[delimiter + 1..],
        ),
        None => (String::new(), authority),
    };

    let bytes = host_and_port.as_bytes();
    let mut state = HostState::FirstCharacter;
    let mut host: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut host_is_reg_name = true;
    let mut port_text: &[u8] = b"";

    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        match state {
            HostState::FirstCharacter => {
                if c == b'[' {
                    host_is_reg_name = false;
                    state = HostState::IpLiteral;
                } else {
                    state = HostState::NotIpLiteral;
                    // Reprocess as the first reg-name character.
                    continue;
                }
            }

            HostState::NotIpLiteral => {
                if c == b'%' {
                    state = HostState::PercentEncoded(PercentDecoder::new());
                } else if c == b':' {
                    port_text = &bytes[i + 1..];
                    state = HostState::Port;
                    break;
                } else if REG_NAME.contains(c) {
                    host.push(c);
                } else {
                    return Err(ParseError::InvalidHost);
                }
            }

            HostState::PercentEncoded(mut decoder) => match decoder.next(c)? {
                Some(byte) => {
                    host.push(byte);
                    state = HostState::NotIpLiteral;
                }
                None => state = HostState::PercentEncoded(decoder),
            },

            HostState::IpLiteral => {
                if c == b'v' {
                    host.push(c);
                    state = HostState::IpvFutureNumber;
                } else {
                    state = HostState::Ipv6Address;
                    // Reprocess as the first address character.
                    continue;
                }
            }

            HostState::Ipv6Address => {
                if c == b']' {
                    if !is_valid_ipv6(&host) {
                        return Err(ParseError::InvalidHost);
                    }
                    state = HostState::GarbageCheck;
                } else {
                    host.push(c);
                }
            }

            HostState::IpvFutureNumber => {
                if c == b'.' {
                    state = HostState::IpvFutureBody;
                } else if !HEXDIG.contains(c) {
                    return Err(ParseError::InvalidHost);
                }
                host.push(c);
            }

            HostState::IpvFutureBody => {
                if c == b']' {
                    state = HostState::GarbageCheck;
                } else if IPV_FUTURE_TAIL.contains(c) {
                    host.push(c);
                } else {
                    return Err(ParseError::InvalidHost);
                }
            }

            HostState::GarbageCheck => {
                if c != b':' {
                    return Err(ParseError::InvalidHost);
                }
                port_text = &bytes[i + 1..];
                state = HostState::Port;
                break;
            }

            // Unreachable: entering the port state breaks out of the scan.
            HostState::Port => break,
        }
        i += 1;
    }

    // The scan must not end inside a literal or an unfinished escape.
    match state {
        HostState::FirstCharacter
        | HostState::NotIpLiteral
        | HostState::GarbageCheck
        | HostState::Port => {}
        HostState::PercentEncoded(_)
        | HostState::IpLiteral
        | HostState::Ipv6Address
        | HostState::IpvFutureNumber
        | HostState::IpvFutureBody => return Err(ParseError::InvalidHost),
    }

    let mut host = String::from_utf8(host).map_err(|_| ParseError::InvalidPercentEncoding)?;
    if host_is_reg_name {
        host.make_ascii_lowercase();
    }

    Ok(AuthorityComponents {
        user_info,
        host,
        port: parse_port(port_text)?,
    })
}

/// Parse the text after the port delimiter.
///
/// Empty text means the port is absent, which is not an error.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPort`] for any non-digit character or a
/// value over 65535.
fn parse_port(text: &[u8]) -> Result<Option<u16>> {
    if text.is_empty() {
        return Ok(None);
    }
    let mut value: u32 = 0;
    for &c in text {
        if !c.is_ascii_digit() {
            return Err(ParseError::InvalidPort);
        }
        value = value * 10 + u32::from(c - b'0');
        if value > u32::from(u16::MAX) {
            return Err(ParseError::InvalidPort);
        }
    }
    u16::try_from(value)
        .map(Some)
        .map_err(|_| ParseError::InvalidPort)
}
