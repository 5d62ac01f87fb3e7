//! ISO year-week identifiers and goal periods
//!
//! Weeks use the `YYYY-Www` form produced by HTML week inputs (e.g. `2024-W05`).
//! A goal period is either one such week or the whole program (`global`).

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ISO-8601 week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    year: i32,
    week: u32,
}

impl Week {
    /// Create a week, validating that it exists in the ISO calendar
    pub fn new(year: i32, week: u32) -> Result<Self, WeekParseError> {
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .map(|_| Self { year, week })
            .ok_or_else(|| WeekParseError(format!("{year:04}-W{week:02}")))
    }

    /// The ISO week containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn week(&self) -> u32 {
        self.week
    }

    /// Monday of this week
    pub fn first_day(&self) -> NaiveDate {
        // Validated on construction
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon).unwrap_or_default()
    }
}

impl FromStr for Week {
    type Err = WeekParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || WeekParseError(s.to_string());

        let (year, week) = trimmed
            .split_once("-W")
            .or_else(|| trimmed.split_once("-w"))
            .ok_or_else(invalid)?;
        if year.len() != 4 || week.is_empty() || week.len() > 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let week = week.parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, week).map_err(|_| invalid())
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl Serialize for Week {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Week {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Period a goal applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GoalPeriod {
    /// Whole-program target
    Global,
    /// Target for a single week
    Week(Week),
}

impl GoalPeriod {
    pub const GLOBAL: &'static str = "global";

    /// The week, if this is a per-week period
    pub const fn week(&self) -> Option<Week> {
        match self {
            Self::Global => None,
            Self::Week(week) => Some(*week),
        }
    }

    #[inline]
    pub const fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl From<Week> for GoalPeriod {
    fn from(week: Week) -> Self {
        Self::Week(week)
    }
}

impl FromStr for GoalPeriod {
    type Err = WeekParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::GLOBAL) {
            Ok(Self::Global)
        } else {
            s.parse().map(Self::Week)
        }
    }
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str(Self::GLOBAL),
            Self::Week(week) => week.fmt(f),
        }
    }
}

impl Serialize for GoalPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GoalPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Error when parsing a week or goal period
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ISO week: {0} (expected YYYY-Www)")]
pub struct WeekParseError(pub String);
