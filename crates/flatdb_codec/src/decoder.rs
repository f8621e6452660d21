//! Record decoder for the line-oriented on-disk format.

use crate::error::{CodecError, CodecResult};
use crate::ident::is_valid_identifier_bytes;
use crate::record::Record;

/// Decode a record from its on-disk byte form.
///
/// Input is split on `\n`. Zero-length lines are skipped, which absorbs
/// both an empty input and the encoder's no-trailing-separator convention.
///
/// Decoding is strict: any malformed line invalidates the whole record.
///
/// # Errors
///
/// Per line, in order of detection:
/// - [`CodecError::MissingSeparator`] if the line has no `:`
/// - [`CodecError::InvalidKey`] if the text before the first `:` is not a
///   valid identifier (a leading `:` always fails here, because the
///   implied key is empty)
/// - [`CodecError::DuplicateKey`] if an earlier line already produced the
///   same key
/// - [`CodecError::InvalidEscape`] / [`CodecError::TruncatedEscape`] for a
///   backslash followed by anything other than `n` or `\`, or a backslash
///   as the final byte of the line
pub fn decode_record(bytes: &[u8]) -> CodecResult<Record> {
    let mut record = Record::new();

    for line in bytes.split(|&b| b == b'\n') {
        if line.is_empty() {
            continue;
        }

        let sep = line
            .iter()
            .position(|&b| b == b':')
            .ok_or(CodecError::MissingSeparator)?;

        let key_bytes = &line[..sep];
        if !is_valid_identifier_bytes(key_bytes) {
            return Err(CodecError::invalid_key(String::from_utf8_lossy(key_bytes)));
        }
        // Identifier bytes are ASCII, so this conversion is lossless.
        let key = String::from_utf8_lossy(key_bytes).into_owned();

        if record.contains_key(&key) {
            return Err(CodecError::duplicate_key(key));
        }

        let value = unescape_value(&line[sep + 1..])?;
        record.insert(key, value);
    }

    Ok(record)
}

fn unescape_value(input: &[u8]) -> CodecResult<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.iter().copied();

    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(b'n') => out.push(b'\n'),
            Some(b'\\') => out.push(b'\\'),
            Some(other) => return Err(CodecError::InvalidEscape { byte: other }),
            None => return Err(CodecError::TruncatedEscape),
        }
    }

    Ok(out)
}
