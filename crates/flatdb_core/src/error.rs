//! Error types for flatdb core.

use flatdb_codec::CodecError;
use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in store operations.
///
/// Every operation returns a discriminated result instead of panicking or
/// terminating the process; no operation retries internally.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure: directory creation, open, write, read, or
    /// unlink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The database name fails identifier validation.
    ///
    /// This is a configuration error: no [`Database`](crate::Database) is
    /// constructed from an invalid name.
    #[error("invalid database name: {name:?}")]
    InvalidDatabaseName {
        /// The rejected name.
        name: String,
    },

    /// The record-name argument fails identifier validation.
    #[error("invalid record name: {name:?}")]
    InvalidRecordName {
        /// The rejected name.
        name: String,
    },

    /// No record exists under the given name.
    #[error("record not found: {name}")]
    RecordNotFound {
        /// Name of the missing record.
        name: String,
    },

    /// A record already exists and overwriting was not requested.
    #[error("record already exists: {name}")]
    RecordExists {
        /// Name of the existing record.
        name: String,
    },

    /// The record data could not be encoded (a key fails identifier
    /// validation). Returned before any file is touched.
    #[error("record data could not be encoded: {0}")]
    Encode(#[source] CodecError),

    /// The stored record content is malformed: missing separator,
    /// non-identifier key, duplicate key, or an invalid escape sequence.
    #[error("stored record is malformed: {0}")]
    Decode(#[source] CodecError),
}

impl CoreError {
    /// Creates an invalid database name error.
    pub fn invalid_database_name(name: impl Into<String>) -> Self {
        Self::InvalidDatabaseName { name: name.into() }
    }

    /// Creates an invalid record name error.
    pub fn invalid_record_name(name: impl Into<String>) -> Self {
        Self::InvalidRecordName { name: name.into() }
    }

    /// Creates a record not found error.
    pub fn record_not_found(name: impl Into<String>) -> Self {
        Self::RecordNotFound { name: name.into() }
    }

    /// Creates a record exists error.
    pub fn record_exists(name: impl Into<String>) -> Self {
        Self::RecordExists { name: name.into() }
    }
}
