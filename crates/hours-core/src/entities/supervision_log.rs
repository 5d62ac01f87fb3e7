//! Supervision log entity - hours of supervision received

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{Hours, Week};

/// Supervision hours for one week. No approval step; always final.
#[derive(Debug, Clone, PartialEq)]
pub struct SupervisionLog {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub week: Week,
    pub user_id: Uuid,
    pub supervision_hours: Hours,
}

impl SupervisionLog {
    pub fn new(user_id: Uuid, week: Week, supervision_hours: Hours) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            week,
            user_id,
            supervision_hours,
        }
    }
}
