//! Clinical log entity <-> model mapper

use hours_core::entities::ClinicalLog;
use hours_core::error::DomainError;
use hours_core::value_objects::{Hours, LogStatus, Week};

use super::corrupt_row;
use crate::models::ClinicalLogModel;

impl TryFrom<ClinicalLogModel> for ClinicalLog {
    type Error = DomainError;

    fn try_from(model: ClinicalLogModel) -> Result<Self, Self::Error> {
        let week: Week = model
            .week
            .parse()
            .map_err(|e| corrupt_row("clinical_logs", e))?;
        let status =
            LogStatus::from_stored(&model.status).map_err(|e| corrupt_row("clinical_logs", e))?;

        Ok(ClinicalLog {
            id: model.id,
            created_at: model.created_at,
            week,
            user_id: model.user_id,
            supervisor_id: model.supervisor_id,
            direct_hours: Hours::coerce(&model.direct_hours),
            indirect_hours: Hours::coerce(&model.indirect_hours),
            site: model.site,
            status,
        })
    }
}

/// Column values for inserting a clinical log
pub struct ClinicalLogInsert<'a> {
    pub week: String,
    pub direct_hours: String,
    pub indirect_hours: String,
    pub site: &'a str,
    pub status: &'static str,
}

impl<'a> ClinicalLogInsert<'a> {
    pub fn new(log: &'a ClinicalLog) -> Self {
        Self {
            week: log.week.to_string(),
            direct_hours: log.direct_hours.to_string(),
            indirect_hours: log.indirect_hours.to_string(),
            site: &log.site,
            status: log.status.as_str(),
        }
    }
}
