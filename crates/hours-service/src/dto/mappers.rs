//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use hours_core::entities::{ClinicalLog, Goal, SupervisionLog, UserProfile};
use hours_core::{ProgressOverview, Sheet, WeekProgress, Workbook};

use super::responses::{
    ClinicalLogResponse, GoalResponse, ProfileResponse, ProgressOverviewResponse, SheetResponse,
    SupervisionLogResponse, WeekProgressResponse, WorkbookResponse,
};

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            role: profile.role.to_string(),
            created_at: profile.created_at,
        }
    }
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self::from(&profile)
    }
}

// ============================================================================
// Log Mappers
// ============================================================================

impl From<&ClinicalLog> for ClinicalLogResponse {
    fn from(log: &ClinicalLog) -> Self {
        Self {
            id: log.id.to_string(),
            created_at: log.created_at,
            week: log.week.to_string(),
            user_id: log.user_id.to_string(),
            supervisor_id: log.supervisor_id.to_string(),
            direct_hours: log.direct_hours.value(),
            indirect_hours: log.indirect_hours.value(),
            site: log.site.clone(),
            status: log.status.to_string(),
        }
    }
}

impl From<ClinicalLog> for ClinicalLogResponse {
    fn from(log: ClinicalLog) -> Self {
        Self::from(&log)
    }
}

impl From<&SupervisionLog> for SupervisionLogResponse {
    fn from(log: &SupervisionLog) -> Self {
        Self {
            id: log.id.to_string(),
            created_at: log.created_at,
            week: log.week.to_string(),
            user_id: log.user_id.to_string(),
            supervision_hours: log.supervision_hours.value(),
        }
    }
}

// ============================================================================
// Goal Mappers
// ============================================================================

impl From<&Goal> for GoalResponse {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id.to_string(),
            user_id: goal.user_id.to_string(),
            week: goal.period.to_string(),
            clinical_hours_target: goal.clinical_hours_target.value(),
            supervision_hours_target: goal.supervision_hours_target.value(),
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

// ============================================================================
// Progress Mappers
// ============================================================================

impl From<&ProgressOverview> for ProgressOverviewResponse {
    fn from(overview: &ProgressOverview) -> Self {
        Self {
            user_id: overview.user_id.to_string(),
            week: overview.filter.week().map(|w| w.to_string()),
            total_direct: overview.total_direct.value(),
            total_indirect: overview.total_indirect.value(),
            total_clinical: overview.total_clinical.value(),
            total_supervision: overview.total_supervision.value(),
            clinical_goal: overview.clinical_goal.value(),
            supervision_goal: overview.supervision_goal.value(),
            clinical_remaining: overview.clinical_remaining.value(),
            supervision_remaining: overview.supervision_remaining.value(),
        }
    }
}

impl From<&WeekProgress> for WeekProgressResponse {
    fn from(week: &WeekProgress) -> Self {
        Self {
            week: week.week.to_string(),
            direct_hours: week.direct.value(),
            indirect_hours: week.indirect.value(),
            clinical_hours: week.clinical.value(),
            supervision_hours: week.supervision.value(),
            clinical_goal: week.clinical_goal.value(),
            supervision_goal: week.supervision_goal.value(),
            clinical_remaining: week.clinical_remaining,
            supervision_remaining: week.supervision_remaining,
        }
    }
}

// ============================================================================
// Export Mappers
// ============================================================================

impl From<&Sheet> for SheetResponse {
    fn from(sheet: &Sheet) -> Self {
        Self {
            title: sheet.title().to_string(),
            slug: sheet.kind.slug().to_string(),
            headers: sheet.headers.clone(),
            rows: sheet.rows.clone(),
        }
    }
}

/// Workbook tagged with the exported user
pub struct WorkbookFor<'a> {
    pub user_id: uuid::Uuid,
    pub workbook: &'a Workbook,
}

impl From<WorkbookFor<'_>> for WorkbookResponse {
    fn from(data: WorkbookFor<'_>) -> Self {
        Self {
            user_id: data.user_id.to_string(),
            sheets: data.workbook.sheets.iter().map(SheetResponse::from).collect(),
        }
    }
}
