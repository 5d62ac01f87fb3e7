//! Goal entity <-> model mapper

use hours_core::entities::Goal;
use hours_core::error::DomainError;
use hours_core::value_objects::{GoalPeriod, Hours};

use super::corrupt_row;
use crate::models::GoalModel;

impl TryFrom<GoalModel> for Goal {
    type Error = DomainError;

    fn try_from(model: GoalModel) -> Result<Self, Self::Error> {
        let period: GoalPeriod = model.week.parse().map_err(|e| corrupt_row("goals", e))?;

        Ok(Goal {
            id: model.id,
            user_id: model.user_id,
            period,
            clinical_hours_target: Hours::coerce(&model.clinical_hours_target),
            supervision_hours_target: Hours::coerce(&model.supervision_hours_target),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values for writing a goal
pub struct GoalInsert {
    pub week: String,
    pub clinical_hours_target: String,
    pub supervision_hours_target: String,
}

impl GoalInsert {
    pub fn new(goal: &Goal) -> Self {
        Self {
            week: goal.period.to_string(),
            clinical_hours_target: goal.clinical_hours_target.to_string(),
            supervision_hours_target: goal.supervision_hours_target.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_global_goal_row() {
        let model = GoalModel {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            week: "global".to_string(),
            clinical_hours_target: "3500".to_string(),
            supervision_hours_target: "".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let goal = Goal::try_from(model).unwrap();
        assert_eq!(goal.period, GoalPeriod::Global);
        assert_eq!(goal.clinical_hours_target.value(), 3500.0);
        assert_eq!(goal.supervision_hours_target, Hours::ZERO);
        assert_eq!(GoalInsert::new(&goal).week, "global");
    }
}
