//! Archive directory structure
//!
//! An archive is a directory holding a marker file and one subdirectory per
//! band:
//!
//! ```text
//! archive/
//! ├── DURA-ARCHIVE     # Marker: exact magic content proves this is an archive
//! ├── b0000/           # Band 0
//! ├── b0001/           # Band 1
//! │   ...
//! └── b10000/          # Bands past 9999 simply get wider names
//! ```

use dura_core::BandNumber;
use std::path::{Path, PathBuf};

/// File name of the archive marker
pub const ARCHIVE_HEADER_NAME: &str = "DURA-ARCHIVE";

/// Prefix of every band directory name
pub const BAND_DIR_PREFIX: &str = "b";

/// Archive directory paths
///
/// Pure path arithmetic; nothing here touches the filesystem except
/// [`ArchivePaths::exists`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePaths {
    root: PathBuf,
}

impl ArchivePaths {
    /// Create paths from root directory
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        ArchivePaths {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the archive root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the marker file path
    pub fn header(&self) -> PathBuf {
        self.root.join(ARCHIVE_HEADER_NAME)
    }

    /// Get the directory for a band
    pub fn band_dir(&self, band: &BandNumber) -> PathBuf {
        self.root.join(band_dir_name(band))
    }

    /// Check if the marker file is present
    ///
    /// Presence alone is not validity; opening the archive checks content.
    pub fn exists(&self) -> bool {
        self.header().exists()
    }
}

/// Directory name for a band, e.g. `b0042`
pub fn band_dir_name(band: &BandNumber) -> String {
    format!("{}{}", BAND_DIR_PREFIX, band.canonical())
}

/// Parse a band directory name
///
/// Only canonical names count: `b0042` is band 42, `b42` and `b00042` are
/// not bands at all.
pub fn parse_band_dir_name(name: &str) -> Option<BandNumber> {
    let digits = name.strip_prefix(BAND_DIR_PREFIX)?;
    if !BandNumber::is_canonical(digits) {
        return None;
    }
    BandNumber::parse(digits).ok()
}
