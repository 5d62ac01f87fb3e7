//! Progress overview for one user, optionally scoped to a week

use uuid::Uuid;

use super::{remaining_clamped, GoalDefaults, WeekFilter};
use crate::entities::{ClinicalLog, Goal, SupervisionLog};
use crate::value_objects::{GoalPeriod, Hours};

/// Targets in effect for an overview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalTargets {
    pub clinical: Hours,
    pub supervision: Hours,
}

/// Totals and remaining hours for a user
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressOverview {
    pub user_id: Uuid,
    pub filter: WeekFilter,
    pub total_direct: Hours,
    pub total_indirect: Hours,
    pub total_clinical: Hours,
    pub total_supervision: Hours,
    pub clinical_goal: Hours,
    pub supervision_goal: Hours,
    pub clinical_remaining: Hours,
    pub supervision_remaining: Hours,
}

/// Pick the targets for `user_id` under `filter`.
///
/// For the whole program a `global` row wins, then the sum of the user's week
/// rows, then `defaults`. For a single week only that week's row counts and the
/// target is zero without one.
pub fn resolve_goal_targets(
    goals: &[Goal],
    user_id: Uuid,
    filter: WeekFilter,
    defaults: GoalDefaults,
) -> GoalTargets {
    let mut own = goals.iter().filter(|g| g.user_id == user_id);

    match filter {
        WeekFilter::Week(week) => own
            .find(|g| g.period == GoalPeriod::Week(week))
            .map_or(
                GoalTargets {
                    clinical: Hours::ZERO,
                    supervision: Hours::ZERO,
                },
                GoalTargets::from,
            ),
        WeekFilter::All => {
            let own: Vec<&Goal> = own.collect();
            if let Some(global) = own.iter().find(|g| g.period.is_global()) {
                return GoalTargets::from(*global);
            }

            let weekly: Vec<&&Goal> = own.iter().filter(|g| !g.period.is_global()).collect();
            if weekly.is_empty() {
                return GoalTargets {
                    clinical: defaults.clinical,
                    supervision: defaults.supervision,
                };
            }

            GoalTargets {
                clinical: weekly.iter().map(|g| g.clinical_hours_target).sum(),
                supervision: weekly.iter().map(|g| g.supervision_hours_target).sum(),
            }
        }
    }
}

impl From<&Goal> for GoalTargets {
    fn from(goal: &Goal) -> Self {
        Self {
            clinical: goal.clinical_hours_target,
            supervision: goal.supervision_hours_target,
        }
    }
}

/// Aggregate a user's rows into an overview
pub fn compute_overview(
    user_id: Uuid,
    clinical_logs: &[ClinicalLog],
    supervision_logs: &[SupervisionLog],
    goals: &[Goal],
    filter: WeekFilter,
    defaults: GoalDefaults,
) -> ProgressOverview {
    let counted: Vec<&ClinicalLog> = clinical_logs
        .iter()
        .filter(|log| log.user_id == user_id)
        .filter(|log| log.counts_toward_progress())
        .filter(|log| filter.matches(log.week))
        .collect();

    let total_direct: Hours = counted.iter().map(|log| log.direct_hours).sum();
    let total_indirect: Hours = counted.iter().map(|log| log.indirect_hours).sum();
    let total_clinical = total_direct + total_indirect;

    let total_supervision: Hours = supervision_logs
        .iter()
        .filter(|log| log.user_id == user_id)
        .filter(|log| filter.matches(log.week))
        .map(|log| log.supervision_hours)
        .sum();

    let targets = resolve_goal_targets(goals, user_id, filter, defaults);

    ProgressOverview {
        user_id,
        filter,
        total_direct,
        total_indirect,
        total_clinical,
        total_supervision,
        clinical_goal: targets.clinical,
        supervision_goal: targets.supervision,
        clinical_remaining: Hours::new(remaining_clamped(
            targets.clinical.value(),
            total_clinical.value(),
        )),
        supervision_remaining: Hours::new(remaining_clamped(
            targets.supervision.value(),
            total_supervision.value(),
        )),
    }
}
