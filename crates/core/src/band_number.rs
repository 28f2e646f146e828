//! Band number type
//!
//! Every backup run writes one band, and bands are identified by a
//! generation counter that only ever grows. On disk the counter appears as
//! decimal text left-padded with zeros to at least four digits:
//!
//! ```text
//! 0000, 0001, ..., 9999, 10000, 10001, ...
//! ```
//!
//! The padding is only a rendering convention. Past 9999 the text gets wider,
//! so plain string order stops matching generation order ("9999" sorts after
//! "10000"). [`BandNumber`] therefore keeps the numeric value and compares on
//! that, and canonical text is produced only when rendering.
//!
//! ## Representation
//!
//! The value is held as its significant decimal digits (no leading zeros,
//! zero is `"0"`), which gives arbitrary precision without a bignum
//! dependency. Comparing two values is a length comparison followed by a
//! byte comparison.

use crate::error::{BandNumberError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Minimum number of digits in the canonical text of a band number
pub const BAND_NUMBER_MIN_WIDTH: usize = 4;

/// Generation counter identifying one band within an archive
///
/// ## Invariants
///
/// - Holds a non-negative integer of any size
/// - Ordering and equality depend only on the numeric value, never on the
///   padding of the text it was parsed from
/// - `Display` renders the canonical form (see [`BandNumber::canonical`])
///
/// ## Examples
///
/// ```
/// use dura_core::BandNumber;
///
/// let a: BandNumber = "0900".parse().unwrap();
/// let b: BandNumber = "900".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.canonical(), "0900");
///
/// let wide: BandNumber = "10001".parse().unwrap();
/// assert!("9000".parse::<BandNumber>().unwrap() < wide);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BandNumber(String);

impl BandNumber {
    /// The first band number in any archive
    pub fn zero() -> Self {
        BandNumber("0".to_string())
    }

    /// Parse band-number text
    ///
    /// Accepts one or more ASCII decimal digits with any amount of leading
    /// zero padding.
    ///
    /// # Errors
    ///
    /// Returns `BandNumberError` for the empty string or any other character,
    /// including signs and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(BandNumberError::Empty);
        }

        if let Some((position, ch)) = raw.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(BandNumberError::InvalidChar {
                input: raw.to_string(),
                char: ch,
                position,
            });
        }

        let significant = raw.trim_start_matches('0');
        if significant.is_empty() {
            Ok(BandNumber::zero())
        } else {
            Ok(BandNumber(significant.to_string()))
        }
    }

    /// True if `raw` is already in canonical form
    ///
    /// Used when scanning directories, where `b0042` names a band but
    /// `b42` or `b00042` does not.
    pub fn is_canonical(raw: &str) -> bool {
        match BandNumber::parse(raw) {
            Ok(n) => n.canonical() == raw,
            Err(_) => false,
        }
    }

    /// Canonical text: decimal, zero-padded to [`BAND_NUMBER_MIN_WIDTH`]
    ///
    /// Values needing more digits are rendered at their natural width.
    pub fn canonical(&self) -> String {
        self.padded(BAND_NUMBER_MIN_WIDTH)
    }

    /// Decimal text zero-padded to at least `width` digits
    pub fn padded(&self, width: usize) -> String {
        format!("{:0>width$}", self.0, width = width)
    }

    /// The band number following this one
    ///
    /// Never overflows; `9999` is followed by `10000`, and so on at any width.
    pub fn next(&self) -> BandNumber {
        let mut digits = self.0.clone().into_bytes();

        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                return BandNumber(digits.into_iter().map(char::from).collect());
            }
        }

        // Every digit carried.
        let mut wider = String::with_capacity(digits.len() + 1);
        wider.push('1');
        wider.extend(digits.into_iter().map(char::from));
        BandNumber(wider)
    }

    /// The value as a `u64`, or `None` if it does not fit
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Number of significant decimal digits
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }
}

impl Default for BandNumber {
    fn default() -> Self {
        BandNumber::zero()
    }
}

impl Ord for BandNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // No leading zeros, so more digits means a larger value.
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for BandNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BandNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>width$}", self.0, width = BAND_NUMBER_MIN_WIDTH)
    }
}

impl From<u64> for BandNumber {
    fn from(value: u64) -> Self {
        BandNumber(value.to_string())
    }
}

impl FromStr for BandNumber {
    type Err = BandNumberError;

    fn from_str(s: &str) -> Result<Self> {
        BandNumber::parse(s)
    }
}

impl TryFrom<String> for BandNumber {
    type Error = BandNumberError;

    fn try_from(value: String) -> Result<Self> {
        BandNumber::parse(&value)
    }
}

impl TryFrom<&str> for BandNumber {
    type Error = BandNumberError;

    fn try_from(value: &str) -> Result<Self> {
        BandNumber::parse(value)
    }
}

impl From<BandNumber> for String {
    fn from(n: BandNumber) -> String {
        n.canonical()
    }
}

/// Canonicalize band-number text
///
/// `"0"` and `"0000"` both become `"0000"`; `"123456"` stays as it is.
pub fn canonicalize_band_number(raw: &str) -> Result<String> {
    Ok(BandNumber::parse(raw)?.canonical())
}

/// Compare two band-number texts by numeric value
///
/// Neither side needs to be canonical. Usable as a sort comparator once both
/// sides are known to be valid:
///
/// ```
/// use dura_core::cmp_band_numbers;
/// use std::cmp::Ordering;
///
/// assert_eq!(cmp_band_numbers("9000", "10001").unwrap(), Ordering::Less);
/// assert_eq!(cmp_band_numbers("0900", "900").unwrap(), Ordering::Equal);
/// ```
pub fn cmp_band_numbers(a: &str, b: &str) -> Result<Ordering> {
    Ok(BandNumber::parse(a)?.cmp(&BandNumber::parse(b)?))
}

// ============================================================================
// Tests
// ============================================================================
