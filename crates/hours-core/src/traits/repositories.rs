//! Repository traits (ports) - define the interface for the record store
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{ClinicalLog, Goal, SuperviseeRelation, SupervisionLog, UserProfile};
use crate::error::DomainError;
use crate::value_objects::{GoalPeriod, LogStatus, Role, Week};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Filters and outcomes
// ============================================================================

/// Query parameters for clinical log listing. `None` fields do not filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClinicalLogFilter {
    pub user_id: Option<Uuid>,
    pub supervisor_id: Option<Uuid>,
    pub week: Option<Week>,
    pub status: Option<LogStatus>,
}

impl ClinicalLogFilter {
    /// All logs owned by `user_id`
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// All logs naming `supervisor_id` as approver
    pub fn for_supervisor(supervisor_id: Uuid) -> Self {
        Self {
            supervisor_id: Some(supervisor_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_week(mut self, week: Option<Week>) -> Self {
        self.week = week;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Option<LogStatus>) -> Self {
        self.status = status;
        self
    }

    /// Check whether a log satisfies every set field
    pub fn matches(&self, log: &ClinicalLog) -> bool {
        self.user_id.is_none_or(|id| log.user_id == id)
            && self.supervisor_id.is_none_or(|id| log.supervisor_id == id)
            && self.week.is_none_or(|week| log.week == week)
            && self.status.is_none_or(|status| log.status == status)
    }
}

/// Query parameters for supervision log listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupervisionLogFilter {
    pub user_id: Uuid,
    pub week: Option<Week>,
}

impl SupervisionLogFilter {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            week: None,
        }
    }

    #[must_use]
    pub fn with_week(mut self, week: Option<Week>) -> Self {
        self.week = week;
        self
    }

    pub fn matches(&self, log: &SupervisionLog) -> bool {
        log.user_id == self.user_id && self.week.is_none_or(|week| log.week == week)
    }
}

/// Outcome of a conditional status update
#[derive(Debug, Clone, PartialEq)]
pub enum StatusUpdate {
    /// The log was pending and now carries the new status
    Updated(ClinicalLog),
    /// No log with that id
    NotFound,
    /// The log had already left `pending`; the stored status is unchanged
    AlreadyResolved(LogStatus),
}

/// Outcome of a conditional delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// The log is no longer pending and was kept
    NotPending(LogStatus),
}

// ============================================================================
// Clinical Log Repository
// ============================================================================

#[async_trait]
pub trait ClinicalLogRepository: Send + Sync {
    /// Persist a new log
    async fn create(&self, log: &ClinicalLog) -> RepoResult<()>;

    /// Find log by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ClinicalLog>>;

    /// List logs matching a filter, oldest week first
    async fn list(&self, filter: ClinicalLogFilter) -> RepoResult<Vec<ClinicalLog>>;

    /// Set the status only if the log is still pending
    async fn update_status_if_pending(&self, id: Uuid, status: LogStatus)
        -> RepoResult<StatusUpdate>;

    /// Delete the log only if it is still pending
    async fn delete_if_pending(&self, id: Uuid) -> RepoResult<DeleteOutcome>;
}

// ============================================================================
// Supervision Log Repository
// ============================================================================

#[async_trait]
pub trait SupervisionLogRepository: Send + Sync {
    /// Persist a new log
    async fn create(&self, log: &SupervisionLog) -> RepoResult<()>;

    /// List logs matching a filter, oldest week first
    async fn list(&self, filter: SupervisionLogFilter) -> RepoResult<Vec<SupervisionLog>>;
}

// ============================================================================
// Goal Repository
// ============================================================================

#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Create a goal; fails with `GoalAlreadyExists` if the (user, period) pair is taken
    async fn create(&self, goal: &Goal) -> RepoResult<()>;

    /// Overwrite the targets of the existing goal for (user, period)
    async fn update(&self, user_id: Uuid, goal: &Goal) -> RepoResult<()>;

    /// Find the goal for (user, period)
    async fn find(&self, user_id: Uuid, period: GoalPeriod) -> RepoResult<Option<Goal>>;

    /// All goals of a user
    async fn list(&self, user_id: Uuid) -> RepoResult<Vec<Goal>>;
}

// ============================================================================
// User Profile Repository
// ============================================================================

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Create a profile
    async fn create(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Find profile by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<UserProfile>>;

    /// Change the role of an existing profile
    async fn update_role(&self, id: Uuid, role: Role) -> RepoResult<()>;
}

// ============================================================================
// Supervisee Repository
// ============================================================================

#[async_trait]
pub trait SuperviseeRepository: Send + Sync {
    /// Link a supervisee to a supervisor
    async fn create(&self, relation: &SuperviseeRelation) -> RepoResult<()>;

    /// Check whether the pair is linked
    async fn exists(&self, supervisor_id: Uuid, supervisee_id: Uuid) -> RepoResult<bool>;

    /// All relations where `supervisor_id` supervises
    async fn list_supervisees(&self, supervisor_id: Uuid) -> RepoResult<Vec<SuperviseeRelation>>;
}
