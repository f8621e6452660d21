//! The record store: put/get/has/del over one database directory.

use crate::config::Config;
use crate::dir::DatabaseDir;
use crate::error::{CoreError, CoreResult};
use flatdb_codec::{decode_record, encode_record, is_valid_identifier, Record};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A handle to one filesystem-backed database.
///
/// A database is a directory; each record is one file inside it holding an
/// encoded key-value mapping. The handle keeps no cached state — its only
/// mutable state is the backing directory itself.
///
/// # Opening
///
/// Construction validates the database name and performs no I/O; the root
/// directory is created lazily on the first successful [`put`](Self::put).
///
/// ```no_run
/// use flatdb_core::{Database, Record};
///
/// let db = Database::open("my_db")?;
///
/// let mut record = Record::new();
/// record.insert("name", "Alice");
/// db.put("user-1", &record)?;
///
/// let loaded = db.get("user-1")?;
/// assert_eq!(loaded.get("name"), Some(&b"Alice"[..]));
/// # Ok::<(), flatdb_core::CoreError>(())
/// ```
///
/// # Concurrency
///
/// All operations are synchronous, blocking, and uncoordinated. Writes are
/// not atomic by default (see [`Config::atomic_writes`]); two concurrent
/// writers race with last-write-wins. Callers must serialize access if
/// multi-writer safety is required.
#[derive(Debug)]
pub struct Database {
    dir: DatabaseDir,
    config: Config,
}

impl Database {
    /// Opens a database rooted at `<name>` relative to the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDatabaseName`] if `name` is not a valid
    /// identifier.
    pub fn open(name: &str) -> CoreResult<Self> {
        Self::open_with_config(name, Config::default())
    }

    /// Opens a database rooted at `<name>` with custom configuration.
    pub fn open_with_config(name: &str, config: Config) -> CoreResult<Self> {
        validate_database_name(name)?;
        Ok(Self {
            dir: DatabaseDir::new(PathBuf::from(name)),
            config,
        })
    }

    /// Opens a database rooted at `<parent>/<name>`.
    ///
    /// `parent` may be any path, absolute or relative; `name` must still
    /// be a valid identifier.
    pub fn open_in(parent: impl AsRef<Path>, name: &str) -> CoreResult<Self> {
        Self::open_in_with_config(parent, name, Config::default())
    }

    /// Opens a database rooted at `<parent>/<name>` with custom
    /// configuration.
    pub fn open_in_with_config(
        parent: impl AsRef<Path>,
        name: &str,
        config: Config,
    ) -> CoreResult<Self> {
        validate_database_name(name)?;
        Ok(Self {
            dir: DatabaseDir::new(parent.as_ref().join(name)),
            config,
        })
    }

    /// Stores a record, failing if one already exists under `name`.
    ///
    /// Failure ordering is contractual — each of these is detected before
    /// any filesystem mutation of the record:
    /// 1. invalid `name` → [`CoreError::InvalidRecordName`]
    /// 2. root directory creation failure → [`CoreError::Io`]
    /// 3. existing record → [`CoreError::RecordExists`]
    /// 4. unencodable data → [`CoreError::Encode`]
    ///
    /// Only then is the file created and written. An empty record is a
    /// valid, explicit zero-length write. A failure once the write has
    /// begun can leave a truncated file; see [`Config::atomic_writes`] for
    /// the opt-in temp-file-plus-rename hardening.
    pub fn put(&self, name: &str, record: &Record) -> CoreResult<()> {
        self.write_record(name, record, false)
    }

    /// Stores a record, replacing any existing one under `name`.
    ///
    /// Same failure ordering as [`put`](Self::put), minus the existence
    /// check.
    pub fn put_overwrite(&self, name: &str, record: &Record) -> CoreResult<()> {
        self.write_record(name, record, true)
    }

    /// Loads the record stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::RecordNotFound`] if [`has`](Self::has) is false
    /// - [`CoreError::Io`] if the file cannot be read
    /// - [`CoreError::Decode`] if the stored content is malformed
    pub fn get(&self, name: &str) -> CoreResult<Record> {
        if !self.has(name) {
            return Err(CoreError::record_not_found(name));
        }
        let bytes = fs::read(self.dir.record_path(name))?;
        decode_record(&bytes).map_err(CoreError::Decode)
    }

    /// Returns true if a filesystem entry exists under `name`.
    ///
    /// Never errors: an invalid name is simply `false`. Does not
    /// distinguish file, directory, or symlink, and does not check that
    /// the entry decodes — a `true` here does not guarantee that
    /// [`get`](Self::get) succeeds.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        is_valid_identifier(name) && self.dir.record_path(name).exists()
    }

    /// Deletes the record stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::RecordNotFound`] if [`has`](Self::has) is false
    /// - [`CoreError::Io`] if the unlink fails
    pub fn del(&self, name: &str) -> CoreResult<()> {
        if !self.has(name) {
            return Err(CoreError::record_not_found(name));
        }
        fs::remove_file(self.dir.record_path(name))?;
        tracing::debug!(record = name, "record deleted");
        Ok(())
    }

    /// Deletes the entire database: every record, any nested entries, and
    /// the root directory itself.
    ///
    /// Idempotent — succeeds if the root never existed. Only true
    /// directories are recursed into; symlinks are unlinked as leaves.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if any removal fails.
    pub fn destroy(&self) -> CoreResult<()> {
        self.dir.destroy()?;
        tracing::debug!(root = %self.dir.root().display(), "database destroyed");
        Ok(())
    }

    /// Returns the database root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.root()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn write_record(&self, name: &str, record: &Record, overwrite: bool) -> CoreResult<()> {
        if !is_valid_identifier(name) {
            return Err(CoreError::invalid_record_name(name));
        }

        self.dir.ensure_exists()?;

        let path = self.dir.record_path(name);
        if !overwrite && path.exists() {
            return Err(CoreError::record_exists(name));
        }

        let encoded = encode_record(record).map_err(CoreError::Encode)?;

        if self.config.atomic_writes {
            let temp = self.dir.temp_path(name);
            if let Err(err) = self.write_file(&temp, &encoded) {
                let _ = fs::remove_file(&temp);
                return Err(err);
            }
            fs::rename(&temp, &path)?;
        } else {
            self.write_file(&path, &encoded)?;
        }

        tracing::debug!(record = name, bytes = encoded.len(), "record written");
        Ok(())
    }

    /// Creates-or-truncates `path` and writes `bytes`.
    ///
    /// The file handle is owned by this scope, so it is closed on every
    /// exit path, including write failures.
    fn write_file(&self, path: &Path, bytes: &[u8]) -> CoreResult<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        if self.config.sync_on_write {
            file.sync_all()?;
        }
        Ok(())
    }
}

fn validate_database_name(name: &str) -> CoreResult<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(CoreError::invalid_database_name(name))
    }
}
