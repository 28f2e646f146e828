//! dura - archive and band primitives for a robust backup system
//!
//! An archive is a directory identified by a `DURA-ARCHIVE` marker file. It
//! holds one band per backup run, numbered by a generation counter that stays
//! totally ordered past 9999.
//!
//! # Quick Start
//!
//! ```no_run
//! use dura::{Archive, BandNumber};
//!
//! let archive = Archive::create("/backups/home")?;
//! let band = archive.create_band()?;
//! assert_eq!(band, BandNumber::zero());
//!
//! let reopened = Archive::open("/backups/home")?;
//! assert_eq!(reopened.last_band()?, Some(band));
//! # Ok::<(), dura::ArchiveError>(())
//! ```
//!
//! # Architecture
//!
//! - `dura-core`: [`BandNumber`] parsing, canonical rendering, and ordering
//! - `dura-archive`: [`Archive`] create/open/validate and band enumeration

pub use dura_archive::*;
pub use dura_core::{
    canonicalize_band_number, cmp_band_numbers, BandNumber, BandNumberError,
    BAND_NUMBER_MIN_WIDTH,
};
