//! Supervision log entity <-> model mapper

use hours_core::entities::SupervisionLog;
use hours_core::error::DomainError;
use hours_core::value_objects::Hours;

use super::corrupt_row;
use crate::models::SupervisionLogModel;

impl TryFrom<SupervisionLogModel> for SupervisionLog {
    type Error = DomainError;

    fn try_from(model: SupervisionLogModel) -> Result<Self, Self::Error> {
        Ok(SupervisionLog {
            id: model.id,
            created_at: model.created_at,
            week: model
                .week
                .parse()
                .map_err(|e| corrupt_row("supervision_logs", e))?,
            user_id: model.user_id,
            supervision_hours: Hours::coerce(&model.supervision_hours),
        })
    }
}

/// Column values for inserting a supervision log
pub struct SupervisionLogInsert {
    pub week: String,
    pub supervision_hours: String,
}

impl SupervisionLogInsert {
    pub fn new(log: &SupervisionLog) -> Self {
        Self {
            week: log.week.to_string(),
            supervision_hours: log.supervision_hours.to_string(),
        }
    }
}
