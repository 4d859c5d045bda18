//! Validated shift amounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::ALPHABET_LEN;
use crate::error::{CipherError, Result};

/// Smallest accepted shift.
pub const MIN_SHIFT: u8 = 1;

/// Largest accepted shift.
pub const MAX_SHIFT: u8 = 25;

/// Number of positions to rotate each symbol forward, always in `1..=25`.
///
/// Serializes as a plain integer. Deserialization goes through
/// [`ShiftAmount::new`] so out-of-range values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ShiftAmount(u8);

impl ShiftAmount {
    /// Create a shift amount, rejecting values outside `1..=25`.
    pub fn new(amount: i64) -> Result<Self> {
        if (i64::from(MIN_SHIFT)..=i64::from(MAX_SHIFT)).contains(&amount) {
            Ok(Self(amount as u8))
        } else {
            Err(CipherError::ShiftOutOfRange(amount))
        }
    }

    /// Parse a shift amount from user input, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let amount: i64 = trimmed
            .parse()
            .map_err(|_| CipherError::InvalidShift(trimmed.to_string()))?;
        Self::new(amount)
    }

    /// The raw shift value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The complementary shift that undoes this one (`26 - amount`).
    pub fn inverse(self) -> Self {
        Self(ALPHABET_LEN - self.0)
    }
}

impl fmt::Display for ShiftAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShiftAmount {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for ShiftAmount {
    type Error = CipherError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ShiftAmount> for i64 {
    fn from(value: ShiftAmount) -> Self {
        i64::from(value.0)
    }
}
