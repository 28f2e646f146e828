//! Core types for dura
//!
//! This crate defines the leaf types shared by the archive engine:
//! - BandNumber: generation counter naming each band, ordered by value
//! - Error: band-number parse errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod band_number;
pub mod error;

pub use band_number::{
    canonicalize_band_number, cmp_band_numbers, BandNumber, BAND_NUMBER_MIN_WIDTH,
};
pub use error::{BandNumberError, Result};
