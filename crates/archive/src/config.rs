//! Archive configuration
//!
//! Controls how hard the archive pushes its writes to stable storage.

/// How metadata writes are made durable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurabilityMode {
    /// fsync the written file and its parent directory (default)
    ///
    /// The marker survives a crash immediately after `create` returns.
    Strict,

    /// Skip fsync and leave flushing to the OS
    ///
    /// Writes are still atomic (temp file + rename), but may be lost on
    /// power failure. Meant for tests and scratch archives.
    Cache,
}

impl DurabilityMode {
    /// Whether this mode fsyncs after writing
    pub fn requires_fsync(&self) -> bool {
        matches!(self, DurabilityMode::Strict)
    }
}

impl Default for DurabilityMode {
    fn default() -> Self {
        DurabilityMode::Strict
    }
}

/// Archive configuration
#[derive(Debug, Clone, Default)]
pub struct ArchiveConfig {
    /// Durability of marker and band-directory writes
    pub durability: DurabilityMode,
}

impl ArchiveConfig {
    /// Config with strict durability (default)
    pub fn strict() -> Self {
        ArchiveConfig {
            durability: DurabilityMode::Strict,
        }
    }

    /// Config for testing
    ///
    /// Skips fsync for faster tests.
    pub fn for_testing() -> Self {
        ArchiveConfig {
            durability: DurabilityMode::Cache,
        }
    }

    /// Set durability mode
    pub fn with_durability(mut self, mode: DurabilityMode) -> Self {
        self.durability = mode;
        self
    }
}
