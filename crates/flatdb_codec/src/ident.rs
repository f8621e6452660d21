//! Identifier validation.
//!
//! Identifiers name databases, records, and record keys. Restricting them
//! to `[A-Za-z0-9_-]` also doubles as the path-traversal defense: neither
//! `/` nor `.` is representable, so a record name can never escape its
//! database directory.

/// Returns true if `b` is allowed inside an identifier.
#[must_use]
pub const fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Returns true if `s` is a valid identifier.
///
/// A valid identifier is non-empty and consists only of ASCII letters,
/// digits, underscores, and hyphens.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_identifier_byte)
}

/// Byte-slice form of [`is_valid_identifier`], used by the decoder where
/// keys arrive as raw bytes.
#[must_use]
pub fn is_valid_identifier_bytes(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().copied().all(is_identifier_byte)
}
