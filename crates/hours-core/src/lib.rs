//! # hours-core
//!
//! Domain layer containing entities, value objects, repository and notifier
//! traits, the progress aggregation engine and the export transform.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod export;
pub mod progress;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ClinicalLog, Goal, SuperviseeRelation, SupervisionLog, UserProfile};
pub use error::DomainError;
pub use export::{build_workbook, ExportError, Sheet, SheetKind, Workbook};
pub use progress::{
    compute_overview, remaining_clamped, remaining_signed, weekly_breakdown, GoalDefaults,
    ProgressOverview, WeekFilter, WeekProgress,
};
pub use traits::{
    ClinicalLogFilter, ClinicalLogRepository, DeleteOutcome, GoalRepository, NotifyError,
    RepoResult, StatusUpdate, SubmissionNotice, SubmissionNotifier, SuperviseeRepository,
    SupervisionLogFilter, SupervisionLogRepository, UserProfileRepository,
};
pub use value_objects::{
    format_hours, Actor, GoalPeriod, Hours, HoursError, LogStatus, Role, Week, WeekParseError,
};
