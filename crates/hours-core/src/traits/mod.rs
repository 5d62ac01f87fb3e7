//! Ports implemented by the infrastructure crates

mod notifier;
mod repositories;

pub use notifier::{NotifyError, SubmissionNotice, SubmissionNotifier};
pub use repositories::{
    ClinicalLogFilter, ClinicalLogRepository, DeleteOutcome, GoalRepository, RepoResult,
    StatusUpdate, SuperviseeRepository, SupervisionLogFilter, SupervisionLogRepository,
    UserProfileRepository,
};
