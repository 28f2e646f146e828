//! Archive marker file
//!
//! The marker is a small file named `DURA-ARCHIVE` at the archive root whose
//! content is exactly [`ARCHIVE_MAGIC`]. Nothing else proves a directory is
//! an archive.
//!
//! # Write protocol
//!
//! 1. Write the magic to a uniquely named temp file in the archive root
//! 2. fsync the temp file (Strict only)
//! 3. Rename over `DURA-ARCHIVE` (atomic on the same filesystem)
//! 4. fsync the archive root (Strict only)
//!
//! A concurrent reader sees either no marker or the complete marker, never a
//! partial one. Each writer gets its own temp file, so concurrent creators
//! cannot truncate each other's writes.

use crate::config::DurabilityMode;
use crate::error::{ArchiveError, Result};
use crate::paths::{ArchivePaths, ARCHIVE_HEADER_NAME};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Exact content of the marker file
///
/// Stable on-disk format constant. Changing it orphans every existing archive.
pub const ARCHIVE_MAGIC: &[u8] = b"dura archive\n";

/// Atomically write the marker into an existing archive root
pub(crate) fn write_header(paths: &ArchivePaths, durability: DurabilityMode) -> Result<()> {
    let root = paths.root();
    let final_path = paths.header();

    let mut temp = tempfile::Builder::new()
        .prefix(&format!(".{}.", ARCHIVE_HEADER_NAME))
        .suffix(".tmp")
        .tempfile_in(root)
        .map_err(|e| ArchiveError::io(root, e))?;

    debug!(
        final_path = %final_path.display(),
        temp_path = %temp.path().display(),
        "Writing archive header"
    );

    // Dropping `temp` on an early return removes the temp file.
    temp.write_all(ARCHIVE_MAGIC)
        .map_err(|e| ArchiveError::io(temp.path(), e))?;
    if durability.requires_fsync() {
        temp.as_file()
            .sync_all()
            .map_err(|e| ArchiveError::io(temp.path(), e))?;
    }

    if let Err(e) = temp.persist(&final_path) {
        warn!(
            temp_path = %e.file.path().display(),
            error = %e.error,
            "Rename failed, cleaning up temp file"
        );
        return Err(ArchiveError::io(&final_path, e.error));
    }

    if durability.requires_fsync() {
        sync_dir(root)?;
    }

    Ok(())
}

/// Check that the marker at `header_path` holds exactly the magic
pub(crate) fn check_header(header_path: &Path) -> Result<()> {
    let bad_header = |source| ArchiveError::BadArchiveHeader {
        path: header_path.to_path_buf(),
        source,
    };

    let file = File::open(header_path).map_err(|e| bad_header(Some(e)))?;

    // One byte past the magic is enough to reject longer files.
    let mut content = Vec::with_capacity(ARCHIVE_MAGIC.len() + 1);
    file.take(ARCHIVE_MAGIC.len() as u64 + 1)
        .read_to_end(&mut content)
        .map_err(|e| bad_header(Some(e)))?;

    if content != ARCHIVE_MAGIC {
        warn!(
            path = %header_path.display(),
            len = content.len(),
            "Archive header content mismatch"
        );
        return Err(bad_header(None));
    }

    Ok(())
}

/// fsync a directory so a rename or create inside it is durable
#[cfg(unix)]
pub(crate) fn sync_dir(dir: &Path) -> Result<()> {
    let dir_fd = File::open(dir).map_err(|e| ArchiveError::io(dir, e))?;
    dir_fd.sync_all().map_err(|e| ArchiveError::io(dir, e))
}

/// Directories cannot be opened for fsync here; rename durability is left
/// to the filesystem.
#[cfg(not(unix))]
pub(crate) fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}
