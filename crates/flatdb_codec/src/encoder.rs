//! Record encoder for the line-oriented on-disk format.

use crate::error::{CodecError, CodecResult};
use crate::ident::is_valid_identifier;
use crate::record::Record;

/// Encode a record to its on-disk byte form.
///
/// Each entry becomes one line `key:escaped_value`, in the record's
/// insertion order. Lines are joined with a single `\n` and there is no
/// trailing separator. An empty record encodes to an empty byte string.
///
/// Only two bytes are escaped inside values: a backslash becomes `\\` and
/// a newline becomes the two-byte sequence `\n`. All other bytes pass
/// through unchanged, including bytes outside printable ASCII.
///
/// # Errors
///
/// Returns [`CodecError::InvalidKey`] if any key fails identifier
/// validation. The whole encode fails; nothing is partially produced.
pub fn encode_record(record: &Record) -> CodecResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut first = true;

    for (key, value) in record.iter() {
        if !is_valid_identifier(key) {
            return Err(CodecError::invalid_key(key));
        }
        if !first {
            out.push(b'\n');
        }
        first = false;

        out.extend_from_slice(key.as_bytes());
        out.push(b':');
        escape_value(value, &mut out);
    }

    Ok(out)
}

fn escape_value(value: &[u8], out: &mut Vec<u8>) {
    for &b in value {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'\n' => out.extend_from_slice(b"\\n"),
            _ => out.push(b),
        }
    }
}
