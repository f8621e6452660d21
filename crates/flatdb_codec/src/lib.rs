//! # flatdb codec
//!
//! Line-oriented record encoding/decoding for flatdb.
//!
//! A record is a flat mapping from identifier keys to byte-string values.
//! On disk, each entry occupies one line:
//!
//! ```text
//! key:escaped_value
//! ```
//!
//! ## Format rules
//!
//! - Keys are identifiers: non-empty, over `[A-Za-z0-9_-]`
//! - Inside values, `\` is escaped as `\\` and newline as `\n`; every
//!   other byte passes through unchanged
//! - Lines are joined with a single `\n`, with no trailing separator
//! - Decoding is strict: a malformed line fails the whole record
//!
//! ## Usage
//!
//! ```
//! use flatdb_codec::{decode_record, encode_record, Record};
//!
//! let mut record = Record::new();
//! record.insert("name", "Alice");
//! record.insert("bio", "line one\nline two");
//!
//! let bytes = encode_record(&record).unwrap();
//! let decoded = decode_record(&bytes).unwrap();
//! assert_eq!(record, decoded);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod ident;
mod record;

pub use decoder::decode_record;
pub use encoder::encode_record;
pub use error::{CodecError, CodecResult};
pub use ident::{is_identifier_byte, is_valid_identifier, is_valid_identifier_bytes};
pub use record::Record;

/// Trait for types that can be encoded to the on-disk line format.
pub trait Encode {
    /// Encode this value to on-disk bytes.
    fn encode(&self) -> CodecResult<Vec<u8>>;
}

/// Trait for types that can be decoded from the on-disk line format.
pub trait Decode: Sized {
    /// Decode this value from on-disk bytes.
    fn decode(bytes: &[u8]) -> CodecResult<Self>;
}

impl Encode for Record {
    fn encode(&self) -> CodecResult<Vec<u8>> {
        encode_record(self)
    }
}

impl Decode for Record {
    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        decode_record(bytes)
    }
}
