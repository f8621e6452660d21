//! Database configuration.

/// Configuration for opening a database.
///
/// The defaults preserve the documented write contract: writes are
/// create-or-truncate with no atomicity and no fsync. Both hardening
/// knobs are opt-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Write records via a temporary file plus rename, so a crash during
    /// a write never leaves a truncated record behind.
    pub atomic_writes: bool,

    /// Call `sync_all` after every successful write (safer but slower).
    pub sync_on_write: bool,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether writes go through a temporary file plus rename.
    #[must_use]
    pub const fn atomic_writes(mut self, value: bool) -> Self {
        self.atomic_writes = value;
        self
    }

    /// Sets whether to fsync after every write.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.atomic_writes);
        assert!(!config.sync_on_write);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new().atomic_writes(true).sync_on_write(true);
        assert!(config.atomic_writes);
        assert!(config.sync_on_write);
    }
}
