//! Shared fixtures for archive integration tests

#![allow(dead_code)]

use dura_archive::{Archive, ArchiveConfig};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary archive, deleted when it goes out of scope
///
/// Derefs to [`Archive`].
pub struct ScratchArchive {
    _temp_dir: TempDir,
    archive: Archive,
}

impl ScratchArchive {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let archive =
            Archive::create_with_config(temp_dir.path().join("archive"), ArchiveConfig::for_testing())
                .unwrap();
        ScratchArchive {
            _temp_dir: temp_dir,
            archive,
        }
    }

    pub fn path(&self) -> &Path {
        self.archive.path()
    }

    /// Make a band directory directly, bypassing `create_band`
    pub fn make_band_dir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::create_dir(&path).unwrap();
        path
    }
}

impl Deref for ScratchArchive {
    type Target = Archive;

    fn deref(&self) -> &Archive {
        &self.archive
    }
}

impl Default for ScratchArchive {
    fn default() -> Self {
        Self::new()
    }
}
