//! IPv4 address literal validation per RFC 3986.

/// Check whether the candidate is a valid dotted-decimal IPv4 address.
///
/// Exactly four groups, each non-empty, all decimal digits, each numerically
/// at most 255. Leading zeros and digit runs longer than three are accepted
/// as long as the numeric bound holds.
pub fn is_valid_ipv4(address: &[u8]) -> bool {
    let mut num_groups = 0;
    for octet in address.split(|&c| c == b'.') {
        num_groups += 1;
        if num_groups > 4 || !is_valid_octet(octet) {
            return false;
        }
    }
    num_groups == 4
}

fn is_valid_octet(octet: &[u8]) -> bool {
    if octet.is_empty() {
        return false;
    }
    let mut value: u32 = 0;
    for &c in octet {
        if !c.is_ascii_digit() {
            return false;
        }
        value = value * 10 + u32::from(c - b'0');
        if value > 255 {
            return false;
        }
    }
    true
}
