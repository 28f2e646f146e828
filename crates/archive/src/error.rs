//! Archive error types
//!
//! The `Display` text of `NoSuchArchive` and `BadArchiveHeader` is part of
//! the operator-facing contract: tools match on it to tell "never created"
//! apart from "exists but is corrupt".

use dura_core::BandNumber;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors raised while creating, opening, or scanning an archive
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive directory could not be found at open time
    #[error("No such archive: {}: {source}", path.display())]
    NoSuchArchive {
        /// Archive root that was checked
        path: PathBuf,
        /// Underlying filesystem error
        source: io::Error,
    },

    /// The marker file is missing or its content is not the archive magic
    #[error("Bad archive header: {}", path.display())]
    BadArchiveHeader {
        /// Path of the marker file
        path: PathBuf,
        /// Read error, if the marker could not be read at all
        source: Option<io::Error>,
    },

    /// Filesystem failure while writing to or scanning the archive
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being operated on
        path: PathBuf,
        /// Underlying filesystem error
        source: io::Error,
    },

    /// A band directory already exists
    #[error("Band {band} already exists")]
    BandExists {
        /// The band that could not be created
        band: BandNumber,
    },
}

impl ArchiveError {
    /// Wrap an I/O error with the path it happened at
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ArchiveError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for `NoSuchArchive`
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArchiveError::NoSuchArchive { .. })
    }

    /// True for `BadArchiveHeader`
    pub fn is_bad_header(&self) -> bool {
        matches!(self, ArchiveError::BadArchiveHeader { .. })
    }
}
