//! IPv6 address literal validation per RFC 3986.

use crate::ipv4::is_valid_ipv4;

/// States for the group-counting scan over a bracket-stripped address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationState {
    /// Nothing consumed yet
    NoGroupsYet,
    /// A single leading colon; only a second colon may follow
    ColonButNoGroupsYet,
    /// Just consumed the `::` compression
    AfterDoubleColon,
    /// Inside a hex group that cannot start an embedded IPv4 address
    InGroupNotIpv4,
    /// Inside a group of pure digits so far; a `.` would begin an
    /// embedded IPv4 address
    InGroupCouldBeIpv4,
    /// A single colon after a completed group
    ColonAfterGroup,
}

/// Check whether the candidate (without brackets) is a valid IPv6 address.
///
/// Counts hex groups of 1-4 digits, allows at most one `::` compression and
/// recognizes a trailing embedded IPv4 literal, which counts as two groups
/// and ends the scan. With a `::` the group total must be at most 7,
/// otherwise exactly 8.
pub fn is_valid_ipv6(address: &[u8]) -> bool {
    use ValidationState as S;

    let mut state = S::NoGroupsYet;
    let mut num_groups = 0usize;
    let mut num_digits = 0usize;
    let mut double_colon_encountered = false;
    let mut ipv4_address_start = 0usize;
    let mut ipv4_address_encountered = false;

    'scan: for (position, &c) in address.iter().enumerate() {
        match state {
            S::NoGroupsYet => {
                if c == b':' {
                    state = S::ColonButNoGroupsYet;
                } else if c.is_ascii_digit() {
                    ipv4_address_start = position;
                    num_digits = 1;
                    state = S::InGroupCouldBeIpv4;
                } else if c.is_ascii_hexdigit() {
                    num_digits = 1;
                    state = S::InGroupNotIpv4;
                } else {
                    return false;
                }
            }

            S::ColonButNoGroupsYet => {
                if c != b':' {
                    return false;
                }
                double_colon_encountered = true;
                state = S::AfterDoubleColon;
            }

            S::AfterDoubleColon => {
                if c.is_ascii_digit() {
                    ipv4_address_start = position;
                    num_digits += 1;
                    if num_digits > 4 {
                        return false;
                    }
                    state = S::InGroupCouldBeIpv4;
                } else if c.is_ascii_hexdigit() {
                    num_digits += 1;
                    if num_digits > 4 {
                        return false;
                    }
                    state = S::InGroupNotIpv4;
                } else {
                    return false;
                }
            }

            S::InGroupNotIpv4 => {
                if c == b':' {
                    num_digits = 0;
                    num_groups += 1;
                    state = S::ColonAfterGroup;
                } else if c.is_ascii_hexdigit() {
                    num_digits += 1;
                    if num_digits > 4 {
                        return false;
                    }
                } else {
                    return false;
                }
            }

            S::InGroupCouldBeIpv4 => {
                if c == b':' {
                    num_digits = 0;
                    num_groups += 1;
                    state = S::ColonAfterGroup;
                } else if c == b'.' {
                    ipv4_address_encountered = true;
                    break 'scan;
                } else if c.is_ascii_digit() {
                    num_digits += 1;
                    if num_digits > 4 {
                        return false;
                    }
                } else if c.is_ascii_hexdigit() {
                    num_digits += 1;
                    if num_digits > 4 {
                        return false;
                    }
                    state = S::InGroupNotIpv4;
                } else {
                    return false;
                }
            }

            S::ColonAfterGroup => {
                if c == b':' {
                    if double_colon_encountered {
                        return false;
                    }
                    double_colon_encountered = true;
                    state = S::AfterDoubleColon;
                } else if c.is_ascii_digit() {
                    ipv4_address_start = position;
                    num_digits += 1;
                    state = S::InGroupCouldBeIpv4;
                } else if c.is_ascii_hexdigit() {
                    num_digits += 1;
                    state = S::InGroupNotIpv4;
                } else {
                    return false;
                }
            }
        }
    }

    // Count the trailing group the scan ended inside of.
    if matches!(state, S::InGroupNotIpv4 | S::InGroupCouldBeIpv4) {
        num_groups += 1;
    }

    // A lone trailing colon outside a completed `::` is malformed.
    if !ipv4_address_encountered && matches!(state, S::ColonButNoGroupsYet | S::ColonAfterGroup) {
        return false;
    }

    if ipv4_address_encountered {
        if !is_valid_ipv4(&address[ipv4_address_start..]) {
            return false;
        }
        num_groups += 2;
    }

    if double_colon_encountered {
        // A double colon stands in for one or more zero groups.
        num_groups <= 7
    } else {
        num_groups == 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_address() {
        assert!(is_valid_ipv6(b"1:2:3:4:5:6:7:8"));
        assert!(is_valid_ipv6(b"2001:db8:85a3:8d3:1319:8a2e:370:7348"));
    }

    #[test]
    fn test_group_count_bounds() {
        assert!(!is_valid_ipv6(b"1:2:3:4:5:6:7"));
        assert!(!is_valid_ipv6(b"1:2:3:4:5:6:7:8:9"));
    }

    #[test]
    fn test_double_colon() {
        assert!(is_valid_ipv6(b"::"));
        assert!(is_valid_ipv6(b"::1"));
        assert!(is_valid_ipv6(b"1::"));
        assert!(is_valid_ipv6(b"fe80::1"));
        assert!(is_valid_ipv6(b"1:2:3:4:5:6:7::"));
    }

    #[test]
    fn test_double_colon_group_limit() {
        // With a compression present at most 7 explicit groups fit.
        assert!(!is_valid_ipv6(b"1:2:3:4:5:6:7:8::"));
        assert!(!is_valid_ipv6(b"::1:2:3:4:5:6:7:8"));
    }

    #[test]
    fn test_only_one_double_colon() {
        assert!(!is_valid_ipv6(b"1::2::3"));
        assert!(!is_valid_ipv6(b"::2::"));
    }

    #[test]
    fn test_trailing_colon() {
        assert!(!is_valid_ipv6(b"1:"));
        assert!(!is_valid_ipv6(b":"));
        assert!(!is_valid_ipv6(b"1:2:3:4:5:6:7:"));
    }

    #[test]
    fn test_leading_single_colon() {
        assert!(!is_valid_ipv6(b":1:2:3:4:5:6:7:8"));
    }

    #[test]
    fn test_group_digit_limit() {
        assert!(!is_valid_ipv6(b"12345::"));
        assert!(is_valid_ipv6(b"1234::"));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(!is_valid_ipv6(b"::g"));
        assert!(!is_valid_ipv6(b"1:2:3:4:5:6:7:x"));
        assert!(!is_valid_ipv6(b""));
    }

    #[test]
    fn test_embedded_ipv4() {
        assert!(is_valid_ipv6(b"::ffff:192.0.2.1"));
        assert!(is_valid_ipv6(b"::127.0.0.1"));
        assert!(is_valid_ipv6(b"64:ff9b::192.0.2.33"));
    }

    #[test]
    fn test_embedded_ipv4_must_be_valid() {
        assert!(!is_valid_ipv6(b"::ffff:192.0.2.999"));
        assert!(!is_valid_ipv6(b"::ffff:1.2.3"));
    }

    #[test]
    fn test_ipv4_part_must_be_trailing() {
        assert!(!is_valid_ipv6(b"1.2.3.4::"));
    }
}
