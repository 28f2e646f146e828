//! Archive engine for dura
//!
//! This crate handles everything that touches the archive directory:
//!
//! - Archive: create, open, and validate an archive root
//! - Header: the `DURA-ARCHIVE` marker and its atomic write protocol
//! - Paths: on-disk layout of the marker and band directories
//! - Bands: enumerate and create band directories, ordered by band number
//! - Config: durability of metadata writes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod archive;
pub mod config;
pub mod error;
pub mod header;
pub mod paths;

pub use archive::Archive;
pub use config::{ArchiveConfig, DurabilityMode};
pub use error::{ArchiveError, Result};
pub use header::ARCHIVE_MAGIC;
pub use paths::{band_dir_name, parse_band_dir_name, ArchivePaths, ARCHIVE_HEADER_NAME, BAND_DIR_PREFIX};
