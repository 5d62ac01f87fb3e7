//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::{GoalPeriod, LogStatus};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Supervisor not found: {0}")]
    SupervisorNotFound(Uuid),

    #[error("Clinical log not found: {0}")]
    ClinicalLogNotFound(Uuid),

    #[error("Goal not found for user {user_id} ({period})")]
    GoalNotFound { user_id: Uuid, period: GoalPeriod },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Invalid week: {0}")]
    InvalidWeek(String),

    #[error("Invalid decision: {0} (expected accepted or declined)")]
    InvalidDecision(LogStatus),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("Not the supervisor of this log")]
    NotLogSupervisor,

    #[error("Not the owner of this log")]
    NotLogOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Clinical log already resolved as {0}")]
    LogAlreadyResolved(LogStatus),

    #[error("Clinical log is {0} and can no longer be deleted")]
    LogNotPending(LogStatus),

    #[error("Goal already exists for user {user_id} ({period})")]
    GoalAlreadyExists { user_id: Uuid, period: GoalPeriod },

    #[error("Profile already exists: {0}")]
    ProfileAlreadyExists(Uuid),

    #[error("Supervisee is already linked to this supervisor")]
    AlreadyLinked,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Notification error: {0}")]
    NotificationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::SupervisorNotFound(_) => "UNKNOWN_SUPERVISOR",
            Self::ClinicalLogNotFound(_) => "UNKNOWN_CLINICAL_LOG",
            Self::GoalNotFound { .. } => "UNKNOWN_GOAL",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidHours(_) => "INVALID_HOURS",
            Self::InvalidWeek(_) => "INVALID_WEEK",
            Self::InvalidDecision(_) => "INVALID_DECISION",

            // Authorization
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::NotLogSupervisor => "NOT_LOG_SUPERVISOR",
            Self::NotLogOwner => "NOT_LOG_OWNER",

            // Conflict
            Self::LogAlreadyResolved(_) => "LOG_ALREADY_RESOLVED",
            Self::LogNotPending(_) => "LOG_NOT_PENDING",
            Self::GoalAlreadyExists { .. } => "GOAL_ALREADY_EXISTS",
            Self::ProfileAlreadyExists(_) => "PROFILE_ALREADY_EXISTS",
            Self::AlreadyLinked => "ALREADY_LINKED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::NotificationError(_) => "NOTIFICATION_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::SupervisorNotFound(_)
                | Self::ClinicalLogNotFound(_)
                | Self::GoalNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidHours(_)
                | Self::InvalidWeek(_)
                | Self::InvalidDecision(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::MissingPermission(_) | Self::NotLogSupervisor | Self::NotLogOwner
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::LogAlreadyResolved(_)
                | Self::LogNotPending(_)
                | Self::GoalAlreadyExists { .. }
                | Self::ProfileAlreadyExists(_)
                | Self::AlreadyLinked
        )
    }

    /// Check if this error comes from an external collaborator (store or mail)
    pub fn is_external(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::NotificationError(_))
    }
}
