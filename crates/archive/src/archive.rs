//! Archive handle
//!
//! An [`Archive`] is bound to a directory that was verified to hold a valid
//! marker at the moment the handle was made. There is no partially-open
//! state: `open` either validates the marker or fails.
//!
//! Bands live in subdirectories of the archive root, named from their
//! canonical band number (see [`crate::paths`]).

use crate::config::ArchiveConfig;
use crate::error::{ArchiveError, Result};
use crate::header::{check_header, sync_dir, write_header};
use crate::paths::{parse_band_dir_name, ArchivePaths};
use dura_core::BandNumber;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle to an archive directory
#[derive(Debug, Clone)]
pub struct Archive {
    paths: ArchivePaths,
    config: ArchiveConfig,
}

impl Archive {
    /// Create an archive at `path` with default config
    ///
    /// Creates the directory and any missing parents, then writes the marker.
    /// Creating over an existing archive rewrites the same marker and leaves
    /// bands alone.
    pub fn create(path: impl AsRef<Path>) -> Result<Archive> {
        Archive::create_with_config(path, ArchiveConfig::default())
    }

    /// Create an archive at `path`
    pub fn create_with_config(path: impl AsRef<Path>, config: ArchiveConfig) -> Result<Archive> {
        let paths = ArchivePaths::from_root(path);

        std::fs::create_dir_all(paths.root()).map_err(|e| ArchiveError::io(paths.root(), e))?;
        write_header(&paths, config.durability)?;

        info!(path = %paths.root().display(), "Archive created");

        Ok(Archive { paths, config })
    }

    /// Open an existing archive with default config
    ///
    /// # Errors
    ///
    /// - `NoSuchArchive` if `path` does not exist
    /// - `BadArchiveHeader` if the marker is missing or has the wrong content
    pub fn open(path: impl AsRef<Path>) -> Result<Archive> {
        Archive::open_with_config(path, ArchiveConfig::default())
    }

    /// Open an existing archive
    pub fn open_with_config(path: impl AsRef<Path>, config: ArchiveConfig) -> Result<Archive> {
        let paths = ArchivePaths::from_root(path);

        if let Err(source) = std::fs::metadata(paths.root()) {
            return Err(ArchiveError::NoSuchArchive {
                path: paths.root().to_path_buf(),
                source,
            });
        }

        check_header(&paths.header())?;

        debug!(path = %paths.root().display(), "Archive opened");

        Ok(Archive { paths, config })
    }

    /// The path this archive was created or opened with
    pub fn path(&self) -> &Path {
        self.paths.root()
    }

    /// Path of the marker file
    ///
    /// For diagnostics and tests; not a stable place to store anything.
    pub fn header_path(&self) -> PathBuf {
        self.paths.header()
    }

    /// Configuration this handle was made with
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Directory holding `band`
    pub fn band_path(&self, band: &BandNumber) -> PathBuf {
        self.paths.band_dir(band)
    }

    /// List bands present in the archive, ascending by band number
    ///
    /// Anything in the root that is not a directory with a canonical band
    /// name is skipped.
    pub fn list_bands(&self) -> Result<Vec<BandNumber>> {
        let root = self.paths.root();
        let mut bands = Vec::new();

        for entry in std::fs::read_dir(root).map_err(|e| ArchiveError::io(root, e))? {
            let entry = entry.map_err(|e| ArchiveError::io(root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| ArchiveError::io(entry.path(), e))?;

            let band = match entry.file_name().to_str() {
                Some(name) if file_type.is_dir() => parse_band_dir_name(name),
                _ => None,
            };

            match band {
                Some(band) => bands.push(band),
                None => debug!(path = %entry.path().display(), "Skipping non-band entry"),
            }
        }

        bands.sort();
        Ok(bands)
    }

    /// Highest band number present, if any
    pub fn last_band(&self) -> Result<Option<BandNumber>> {
        Ok(self.list_bands()?.pop())
    }

    /// Create the directory for the next band and return its number
    ///
    /// The first band is `0000`. Concurrent writers are not coordinated; if
    /// another writer made the same band first this fails with `BandExists`.
    pub fn create_band(&self) -> Result<BandNumber> {
        let band = match self.last_band()? {
            Some(last) => last.next(),
            None => BandNumber::zero(),
        };
        let band_path = self.band_path(&band);

        match std::fs::create_dir(&band_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ArchiveError::BandExists { band });
            }
            Err(e) => return Err(ArchiveError::io(band_path, e)),
        }

        if self.config.durability.requires_fsync() {
            sync_dir(self.paths.root())?;
        }

        info!(band = %band, path = %band_path.display(), "Band created");

        Ok(band)
    }
}
