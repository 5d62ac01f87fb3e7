//! Goal entity - target hours for a user over a period

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{GoalPeriod, Hours};

/// Clinical and supervision targets for one (user, period) pair
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub period: GoalPeriod,
    pub clinical_hours_target: Hours,
    pub supervision_hours_target: Hours,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(
        user_id: Uuid,
        period: GoalPeriod,
        clinical_hours_target: Hours,
        supervision_hours_target: Hours,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            period,
            clinical_hours_target,
            supervision_hours_target,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace both targets
    pub fn set_targets(&mut self, clinical: Hours, supervision: Hours) {
        self.clinical_hours_target = clinical;
        self.supervision_hours_target = supervision;
        self.updated_at = Utc::now();
    }
}
