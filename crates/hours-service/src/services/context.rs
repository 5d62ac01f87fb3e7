//! Service context - dependency container for services
//!
//! Holds the record store repositories, the notification dispatcher and the
//! aggregation settings needed by services.

use std::sync::Arc;
use std::time::Duration;

use hours_core::traits::{
    ClinicalLogRepository, GoalRepository, SubmissionNotifier, SuperviseeRepository,
    SupervisionLogRepository, UserProfileRepository,
};
use hours_core::GoalDefaults;
use hours_db::{
    MemoryClinicalLogRepository, MemoryGoalRepository, MemorySuperviseeRepository,
    MemorySupervisionLogRepository, MemoryUserProfileRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Upper bound on a single notification attempt
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Record store repositories
/// - The submission notifier
/// - Default goal targets and the notification timeout
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    clinical_log_repo: Arc<dyn ClinicalLogRepository>,
    supervision_log_repo: Arc<dyn SupervisionLogRepository>,
    goal_repo: Arc<dyn GoalRepository>,
    profile_repo: Arc<dyn UserProfileRepository>,
    supervisee_repo: Arc<dyn SuperviseeRepository>,

    // Outbound
    notifier: Arc<dyn SubmissionNotifier>,

    // Settings
    goal_defaults: GoalDefaults,
    notify_timeout: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clinical_log_repo: Arc<dyn ClinicalLogRepository>,
        supervision_log_repo: Arc<dyn SupervisionLogRepository>,
        goal_repo: Arc<dyn GoalRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
        supervisee_repo: Arc<dyn SuperviseeRepository>,
        notifier: Arc<dyn SubmissionNotifier>,
        goal_defaults: GoalDefaults,
        notify_timeout: Duration,
    ) -> Self {
        Self {
            clinical_log_repo,
            supervision_log_repo,
            goal_repo,
            profile_repo,
            supervisee_repo,
            notifier,
            goal_defaults,
            notify_timeout,
        }
    }

    // === Repositories ===

    /// Get the clinical log repository
    pub fn clinical_log_repo(&self) -> &dyn ClinicalLogRepository {
        self.clinical_log_repo.as_ref()
    }

    /// Get the supervision log repository
    pub fn supervision_log_repo(&self) -> &dyn SupervisionLogRepository {
        self.supervision_log_repo.as_ref()
    }

    /// Get the goal repository
    pub fn goal_repo(&self) -> &dyn GoalRepository {
        self.goal_repo.as_ref()
    }

    /// Get the user profile repository
    pub fn profile_repo(&self) -> &dyn UserProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the supervisee repository
    pub fn supervisee_repo(&self) -> &dyn SuperviseeRepository {
        self.supervisee_repo.as_ref()
    }

    // === Outbound ===

    /// Get the submission notifier
    pub fn notifier(&self) -> &Arc<dyn SubmissionNotifier> {
        &self.notifier
    }

    // === Settings ===

    /// Targets used when a user has no goal rows
    pub fn goal_defaults(&self) -> GoalDefaults {
        self.goal_defaults
    }

    /// Upper bound on one notification attempt
    pub fn notify_timeout(&self) -> Duration {
        self.notify_timeout
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("notifier", &"SubmissionNotifier")
            .field("goal_defaults", &self.goal_defaults)
            .field("notify_timeout", &self.notify_timeout)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    clinical_log_repo: Option<Arc<dyn ClinicalLogRepository>>,
    supervision_log_repo: Option<Arc<dyn SupervisionLogRepository>>,
    goal_repo: Option<Arc<dyn GoalRepository>>,
    profile_repo: Option<Arc<dyn UserProfileRepository>>,
    supervisee_repo: Option<Arc<dyn SuperviseeRepository>>,
    notifier: Option<Arc<dyn SubmissionNotifier>>,
    goal_defaults: GoalDefaults,
    notify_timeout: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            clinical_log_repo: None,
            supervision_log_repo: None,
            goal_repo: None,
            profile_repo: None,
            supervisee_repo: None,
            notifier: None,
            goal_defaults: GoalDefaults::default(),
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }

    /// Use fresh in-memory repositories for every record store port
    pub fn memory_store(self) -> Self {
        self.clinical_log_repo(Arc::new(MemoryClinicalLogRepository::new()))
            .supervision_log_repo(Arc::new(MemorySupervisionLogRepository::new()))
            .goal_repo(Arc::new(MemoryGoalRepository::new()))
            .profile_repo(Arc::new(MemoryUserProfileRepository::new()))
            .supervisee_repo(Arc::new(MemorySuperviseeRepository::new()))
    }

    pub fn clinical_log_repo(mut self, repo: Arc<dyn ClinicalLogRepository>) -> Self {
        self.clinical_log_repo = Some(repo);
        self
    }

    pub fn supervision_log_repo(mut self, repo: Arc<dyn SupervisionLogRepository>) -> Self {
        self.supervision_log_repo = Some(repo);
        self
    }

    pub fn goal_repo(mut self, repo: Arc<dyn GoalRepository>) -> Self {
        self.goal_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn UserProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn supervisee_repo(mut self, repo: Arc<dyn SuperviseeRepository>) -> Self {
        self.supervisee_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn SubmissionNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn goal_defaults(mut self, defaults: GoalDefaults) -> Self {
        self.goal_defaults = defaults;
        self
    }

    pub fn notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.clinical_log_repo
                .ok_or_else(|| ServiceError::validation("clinical_log_repo is required"))?,
            self.supervision_log_repo
                .ok_or_else(|| ServiceError::validation("supervision_log_repo is required"))?,
            self.goal_repo
                .ok_or_else(|| ServiceError::validation("goal_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.supervisee_repo
                .ok_or_else(|| ServiceError::validation("supervisee_repo is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            self.goal_defaults,
            self.notify_timeout,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_notifier() {
        let err = ServiceContextBuilder::new().memory_store().build().unwrap_err();
        assert!(err.to_string().contains("notifier is required"));
    }
}
