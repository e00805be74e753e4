//! RFC 3986 character class membership tables.
//!
//! Each table is an immutable process-wide constant built at compile time
//! from explicit characters, contiguous ranges and unions of other tables.
//! Only ASCII can ever be a member; bytes >= 0x80 always test negative and
//! must travel percent-encoded.

/// A membership predicate over a set of ASCII characters.
#[derive(Debug, Clone, Copy)]
pub struct CharacterSet {
    table: [bool; 128],
}

impl CharacterSet {
    /// The empty set.
    pub const EMPTY: Self = Self {
        table: [false; 128],
    };

    /// Add a single character to the set.
    const fn with(mut self, c: u8) -> Self {
        self.table[c as usize] = true;
        self
    }

    /// Add a contiguous inclusive range of characters to the set.
    const fn with_range(mut self, first: u8, last: u8) -> Self {
        let mut c = first;
        while c <= last {
            self.table[c as usize] = true;
            c += 1;
        }
        self
    }

    /// Remove a single character from the set.
    const fn without(mut self, c: u8) -> Self {
        self.table[c as usize] = false;
        self
    }

    /// Merge another set into this one.
    const fn union(mut self, other: Self) -> Self {
        let mut i = 0;
        while i < 128 {
            self.table[i] = self.table[i] || other.table[i];
            i += 1;
        }
        self
    }

    /// Check whether the given byte is a member of the set.
    pub const fn contains(&self, c: u8) -> bool {
        c < 128 && self.table[c as usize]
    }
}

/// ASCII letters (`ALPHA`)
pub const ALPHA: CharacterSet = CharacterSet::EMPTY
    .with_range(b'a', b'z')
    .with_range(b'A', b'Z');

/// Decimal digits (`DIGIT`)
pub const DIGIT: CharacterSet = CharacterSet::EMPTY.with_range(b'0', b'9');

/// Hexadecimal digits, both cases (`HEXDIG`)
pub const HEXDIG: CharacterSet = DIGIT.with_range(b'A', b'F').with_range(b'a', b'f');

/// RFC 3986 `unreserved`
pub const UNRESERVED: CharacterSet = ALPHA
    .union(DIGIT)
    .with(b'-')
    .with(b'.')
    .with(b'_')
    .with(b'~');

/// RFC 3986 `sub-delims`
pub const SUB_DELIMS: CharacterSet = CharacterSet::EMPTY
    .with(b'!')
    .with(b'$')
    .with(b'&')
    .with(b'\'')
    .with(b'(')
    .with(b')')
    .with(b'*')
    .with(b'+')
    .with(b',')
    .with(b';')
    .with(b'=');

/// Characters legal in a scheme after the first one
pub const SCHEME_TRAILING: CharacterSet = ALPHA.union(DIGIT).with(b'+').with(b'-').with(b'.');

/// RFC 3986 `pchar`, leaving out `pct-encoded`
pub const PCHAR: CharacterSet = UNRESERVED.union(SUB_DELIMS).with(b':').with(b'@');

/// RFC 3986 `query`/`fragment`, leaving out `pct-encoded`
pub const QUERY_OR_FRAGMENT: CharacterSet = PCHAR.with(b'/').with(b'?');

/// The query character class, additionally leaving out `+`.
///
/// Some deployed services (e.g. AWS S3) treat a literal `+` in a query as a
/// space, so `+` always travels percent-encoded. Deliberate deviation from
/// the RFC 3986 `query` grammar.
pub const QUERY: CharacterSet = QUERY_OR_FRAGMENT.without(b'+');

/// RFC 3986 `userinfo`, leaving out `pct-encoded`
pub const USER_INFO: CharacterSet = UNRESERVED.union(SUB_DELIMS).with(b':');

/// RFC 3986 `reg-name`, leaving out `pct-encoded`
pub const REG_NAME: CharacterSet = UNRESERVED.union(SUB_DELIMS);

/// The character class for the part of an `IPvFuture` literal after the dot
pub const IPV_FUTURE_TAIL: CharacterSet = UNRESERVED.union(SUB_DELIMS).with(b':');
