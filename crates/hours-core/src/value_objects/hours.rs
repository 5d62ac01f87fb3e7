//! Decimal hour amounts
//!
//! Hours arrive from forms as strings. Input is parsed strictly when a log or
//! goal is written; rows read back from the record store are coerced leniently
//! so a malformed legacy value counts as zero instead of failing a whole report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-rounded amount of hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(f64);

impl Hours {
    pub const ZERO: Self = Self(0.0);

    /// Wrap a raw value
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Parse user input: must be a finite, non-negative number
    pub fn parse(input: &str) -> Result<Self, HoursError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(HoursError::Empty);
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| HoursError::NotNumeric(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(HoursError::NotNumeric(trimmed.to_string()));
        }
        if value < 0.0 {
            return Err(HoursError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Coerce a stored value; anything non-numeric becomes zero
    pub fn coerce(input: &str) -> Self {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map_or(Self::ZERO, Self)
    }

    /// Render for presentation with a fixed number of decimals
    pub fn display(self, decimals: usize) -> String {
        format_hours(self.0, decimals)
    }
}

impl Add for Hours {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Hours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<f64> for Hours {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Raw text form, used when writing to the store (`5`, `3.5`)
impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round only at presentation time
pub fn format_hours(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Hour input errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HoursError {
    #[error("hours value is required")]
    Empty,

    #[error("hours must be numeric, got {0:?}")]
    NotNumeric(String),

    #[error("hours must not be negative, got {0}")]
    Negative(f64),
}
