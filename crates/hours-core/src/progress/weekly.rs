//! Week-by-week breakdown with signed remaining hours

use std::collections::BTreeSet;

use uuid::Uuid;

use super::remaining_signed;
use crate::entities::{ClinicalLog, Goal, SupervisionLog};
use crate::value_objects::{Hours, Week};

/// Totals and targets for one week
#[derive(Debug, Clone, PartialEq)]
pub struct WeekProgress {
    pub week: Week,
    pub direct: Hours,
    pub indirect: Hours,
    pub clinical: Hours,
    pub supervision: Hours,
    pub clinical_goal: Hours,
    pub supervision_goal: Hours,
    /// Negative once the week's target is exceeded
    pub clinical_remaining: f64,
    pub supervision_remaining: f64,
}

/// One row per week that has a goal row or counted hours, in week order
pub fn weekly_breakdown(
    user_id: Uuid,
    clinical_logs: &[ClinicalLog],
    supervision_logs: &[SupervisionLog],
    goals: &[Goal],
) -> Vec<WeekProgress> {
    let counted: Vec<&ClinicalLog> = clinical_logs
        .iter()
        .filter(|log| log.user_id == user_id && log.counts_toward_progress())
        .collect();
    let supervision: Vec<&SupervisionLog> = supervision_logs
        .iter()
        .filter(|log| log.user_id == user_id)
        .collect();
    let week_goals: Vec<(Week, &Goal)> = goals
        .iter()
        .filter(|g| g.user_id == user_id)
        .filter_map(|g| g.period.week().map(|w| (w, g)))
        .collect();

    let weeks: BTreeSet<Week> = week_goals
        .iter()
        .map(|(w, _)| *w)
        .chain(counted.iter().map(|log| log.week))
        .chain(supervision.iter().map(|log| log.week))
        .collect();

    weeks
        .into_iter()
        .map(|week| {
            let in_week: Vec<&&ClinicalLog> =
                counted.iter().filter(|log| log.week == week).collect();
            let direct: Hours = in_week.iter().map(|log| log.direct_hours).sum();
            let indirect: Hours = in_week.iter().map(|log| log.indirect_hours).sum();
            let clinical = direct + indirect;
            let supervised: Hours = supervision
                .iter()
                .filter(|log| log.week == week)
                .map(|log| log.supervision_hours)
                .sum();

            let goal = week_goals
                .iter()
                .find(|(w, _)| *w == week)
                .map(|(_, g)| *g);
            let clinical_goal = goal.map_or(Hours::ZERO, |g| g.clinical_hours_target);
            let supervision_goal = goal.map_or(Hours::ZERO, |g| g.supervision_hours_target);

            WeekProgress {
                week,
                direct,
                indirect,
                clinical,
                supervision: supervised,
                clinical_goal,
                supervision_goal,
                clinical_remaining: remaining_signed(clinical_goal.value(), clinical.value()),
                supervision_remaining: remaining_signed(
                    supervision_goal.value(),
                    supervised.value(),
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{GoalPeriod, LogStatus};

    fn week(s: &str) -> Week {
        s.parse().unwrap()
    }

    fn accepted(user_id: Uuid, w: &str, direct: f64, indirect: f64) -> ClinicalLog {
        let mut log = ClinicalLog::new(
            user_id,
            Uuid::new_v4(),
            week(w),
            Hours::new(direct),
            Hours::new(indirect),
            "Site".to_string(),
        );
        log.status = LogStatus::Accepted;
        log
    }

    #[test]
    fn test_empty_breakdown() {
        assert!(weekly_breakdown(Uuid::new_v4(), &[], &[], &[]).is_empty());
    }

    #[test]
    fn test_weeks_are_sorted_and_unique() {
        let user = Uuid::new_v4();
        let logs = vec![
            accepted(user, "2024-W10", 1.0, 0.0),
            accepted(user, "2024-W02", 2.0, 0.0),
            accepted(user, "2024-W10", 3.0, 1.0),
        ];
        let goals = vec![Goal::new(
            user,
            GoalPeriod::Week(week("2023-W52")),
            Hours::new(5.0),
            Hours::new(1.0),
        )];

        let rows = weekly_breakdown(user, &logs, &[], &goals);
        let weeks: Vec<String> = rows.iter().map(|r| r.week.to_string()).collect();
        assert_eq!(weeks, vec!["2023-W52", "2024-W02", "2024-W10"]);

        let w10 = &rows[2];
        assert_eq!(w10.direct.value(), 4.0);
        assert_eq!(w10.clinical.value(), 5.0);
        assert_eq!(w10.clinical_goal, Hours::ZERO);
        assert_eq!(w10.clinical_remaining, -5.0);

        let w52 = &rows[0];
        assert_eq!(w52.clinical_remaining, 5.0);
        assert_eq!(w52.supervision_remaining, 1.0);
    }

    #[test]
    fn test_over_target_goes_negative() {
        let user = Uuid::new_v4();
        let w = week("2024-W05");
        let logs = vec![accepted(user, "2024-W05", 8.0, 4.0)];
        let supervision = vec![SupervisionLog::new(user, w, Hours::new(3.0))];
        let goals = vec![Goal::new(
            user,
            GoalPeriod::Week(w),
            Hours::new(10.0),
            Hours::new(2.0),
        )];

        let rows = weekly_breakdown(user, &logs, &supervision, &goals);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].clinical_remaining, -2.0);
        assert_eq!(rows[0].supervision_remaining, -1.0);
    }

    #[test]
    fn test_global_goal_and_pending_logs_do_not_create_weeks() {
        let user = Uuid::new_v4();
        let mut pending = accepted(user, "2024-W05", 1.0, 1.0);
        pending.status = LogStatus::Pending;
        let goals = vec![Goal::new(
            user,
            GoalPeriod::Global,
            Hours::new(4000.0),
            Hours::new(100.0),
        )];

        assert!(weekly_breakdown(user, &[pending], &[], &goals).is_empty());
    }
}
