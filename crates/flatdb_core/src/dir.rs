//! Database directory layout and teardown.
//!
//! A database is one directory; each record is one regular file directly
//! beneath it:
//!
//! ```text
//! <root>/
//! ├─ <record_name>      # encoded record
//! └─ <record_name>      # ...
//! ```
//!
//! The root directory is created lazily, on the first successful write.
//! There is no lock file and no coordination: callers are responsible for
//! serializing access if multi-writer safety is required.

use crate::error::CoreResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Manages the database directory: path construction, lazy creation, and
/// recursive teardown.
#[derive(Debug)]
pub(crate) struct DatabaseDir {
    /// Root directory path.
    root: PathBuf,
}

impl DatabaseDir {
    /// Creates a handle for the given root. Performs no I/O.
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns the root directory path.
    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true if the root directory exists.
    pub(crate) fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Creates the root directory (and parents) if absent.
    pub(crate) fn ensure_exists(&self) -> CoreResult<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Returns the path of the record file for `name`.
    ///
    /// The caller must have validated `name` as an identifier; the
    /// identifier character class contains no path separators or dots, so
    /// the result always stays inside the root.
    pub(crate) fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Returns the temporary path used for atomic writes of `name`.
    ///
    /// The `.tmp` suffix cannot collide with a record: `.` is not an
    /// identifier byte.
    pub(crate) fn temp_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.tmp"))
    }

    /// Removes the root directory and everything beneath it.
    ///
    /// Idempotent: succeeds if the root never existed. Only true
    /// directories are recursed into; symlinks and every other entry kind
    /// are unlinked as leaves, so a symlink cycle cannot cause an infinite
    /// loop. Failures surface as I/O errors.
    pub(crate) fn destroy(&self) -> CoreResult<()> {
        if !self.root.exists() {
            return Ok(());
        }
        remove_tree(&self.root)?;
        Ok(())
    }
}

/// Recursively removes a directory tree.
fn remove_tree(dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // file_type() does not follow symlinks, so a symlinked directory
        // is unlinked as a leaf instead of recursed into.
        if entry.file_type()?.is_dir() {
            remove_tree(&entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    fs::remove_dir(dir)
}
