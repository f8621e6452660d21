//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A key is not a valid identifier.
    ///
    /// Returned by the encoder when caller-supplied data contains such a
    /// key, and by the decoder when a stored line carries one.
    #[error("key is not a valid identifier: {key:?}")]
    InvalidKey {
        /// The offending key (lossily decoded if it was not UTF-8).
        key: String,
    },

    /// A stored line has no `:` separator between key and value.
    #[error("line has no key/value separator")]
    MissingSeparator,

    /// The same key appeared on more than one line of a stored record.
    #[error("duplicate key: {key:?}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// A backslash was followed by a byte other than `n` or `\`.
    #[error("invalid escape sequence: backslash followed by 0x{byte:02x}")]
    InvalidEscape {
        /// The byte that followed the backslash.
        byte: u8,
    },

    /// A value ended with a lone backslash.
    #[error("value ends with a dangling escape")]
    TruncatedEscape,
}

impl CodecError {
    /// Creates an invalid key error.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Creates a duplicate key error.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }
}
