//! # flatdb core
//!
//! A minimal persistent key-value record store layered directly on a
//! filesystem. A *database* is a directory; a *record* is one file inside
//! it containing a flat mapping of identifier keys to byte-string values,
//! serialized with the line-oriented format from [`flatdb_codec`].
//!
//! This crate provides:
//! - [`Database`]: the put/get/has/del surface plus whole-database destroy
//! - [`Config`]: opt-in write hardening (atomic writes, fsync)
//! - [`CoreError`]: the discriminated result taxonomy for every operation
//!
//! ## Contract highlights
//!
//! - The root directory is created lazily, on the first successful put;
//!   reads against a nonexistent root behave as "record not found"
//! - Database, record, and key names are identifiers over `[A-Za-z0-9_-]`,
//!   which doubles as the path-traversal defense
//! - Failed puts never create, truncate, or partially overwrite a file:
//!   name validation, the existence check, and encoding all happen before
//!   the write begins
//! - No locking and no retries; callers serialize concurrent access

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod dir;
mod error;

pub use config::Config;
pub use database::Database;
pub use error::{CoreError, CoreResult};

// Re-export the record type and codec entry points so most callers only
// need this crate.
pub use flatdb_codec::{decode_record, encode_record, CodecError, Record};
