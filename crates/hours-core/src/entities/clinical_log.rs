//! Clinical log entity - direct/indirect hours awaiting supervisor approval

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::{Hours, LogStatus, Week};

/// Clinical hours submitted by a user for one week
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalLog {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub week: Week,
    pub user_id: Uuid,
    pub supervisor_id: Uuid,
    pub direct_hours: Hours,
    pub indirect_hours: Hours,
    pub site: String,
    pub status: LogStatus,
}

impl ClinicalLog {
    /// Create a new pending log
    pub fn new(
        user_id: Uuid,
        supervisor_id: Uuid,
        week: Week,
        direct_hours: Hours,
        indirect_hours: Hours,
        site: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            week,
            user_id,
            supervisor_id,
            direct_hours,
            indirect_hours,
            site,
            status: LogStatus::Pending,
        }
    }

    /// Direct plus indirect hours
    pub fn total_hours(&self) -> Hours {
        self.direct_hours + self.indirect_hours
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == LogStatus::Pending
    }

    /// Only accepted hours count toward progress
    #[inline]
    pub fn counts_toward_progress(&self) -> bool {
        self.status == LogStatus::Accepted
    }

    /// Check that `decision` is a legal resolution of this log
    pub fn check_resolution(&self, decision: LogStatus) -> Result<(), DomainError> {
        if !decision.is_terminal() {
            return Err(DomainError::InvalidDecision(decision));
        }
        if !self.status.can_transition_to(decision) {
            return Err(DomainError::LogAlreadyResolved(self.status));
        }
        Ok(())
    }

    /// Apply a resolution in place
    pub fn resolve(&mut self, decision: LogStatus) -> Result<(), DomainError> {
        self.check_resolution(decision)?;
        self.status = decision;
        Ok(())
    }

    /// Logs can only be withdrawn while pending
    pub fn check_deletable(&self) -> Result<(), DomainError> {
        if self.is_pending() {
            Ok(())
        } else {
            Err(DomainError::LogNotPending(self.status))
        }
    }
}
