//! Aggregation engine - totals, goals and remaining hours per user
//!
//! Everything here is a pure function over rows already loaded from the
//! record store. Only accepted clinical logs count; supervision logs have no
//! approval step and always count.

mod overview;
mod weekly;

pub use overview::{compute_overview, resolve_goal_targets, GoalTargets, ProgressOverview};
pub use weekly::{weekly_breakdown, WeekProgress};

use crate::value_objects::{Hours, Week};

/// Clinical target used when a user has no goal rows at all
pub const DEFAULT_CLINICAL_GOAL: f64 = 4000.0;

/// Supervision target used when a user has no goal rows at all
pub const DEFAULT_SUPERVISION_GOAL: f64 = 100.0;

/// Fallback targets for the whole-program overview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalDefaults {
    pub clinical: Hours,
    pub supervision: Hours,
}

impl GoalDefaults {
    pub const fn new(clinical: f64, supervision: f64) -> Self {
        Self {
            clinical: Hours::new(clinical),
            supervision: Hours::new(supervision),
        }
    }
}

impl Default for GoalDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_CLINICAL_GOAL, DEFAULT_SUPERVISION_GOAL)
    }
}

/// Week scope of an aggregation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekFilter {
    #[default]
    All,
    Week(Week),
}

impl WeekFilter {
    #[inline]
    pub fn matches(&self, week: Week) -> bool {
        match self {
            Self::All => true,
            Self::Week(w) => *w == week,
        }
    }

    pub const fn week(&self) -> Option<Week> {
        match self {
            Self::All => None,
            Self::Week(w) => Some(*w),
        }
    }
}

impl From<Option<Week>> for WeekFilter {
    fn from(week: Option<Week>) -> Self {
        week.map_or(Self::All, Self::Week)
    }
}

/// Hours still to go, never below zero
#[inline]
pub fn remaining_clamped(goal: f64, achieved: f64) -> f64 {
    (goal - achieved).max(0.0)
}

/// Hours still to go; negative when the target has been exceeded
#[inline]
pub fn remaining_signed(goal: f64, achieved: f64) -> f64 {
    goal - achieved
}
