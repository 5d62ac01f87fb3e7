//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod clinical_log;
pub mod context;
pub mod error;
pub mod export;
pub mod goal;
pub mod input;
pub mod progress;
pub mod supervision_log;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use access::AccessService;
pub use clinical_log::ClinicalLogService;
pub use context::{ServiceContext, ServiceContextBuilder, DEFAULT_NOTIFY_TIMEOUT};
pub use error::{validation_message, ServiceError, ServiceResult};
pub use export::ExportService;
pub use goal::GoalService;
pub use progress::ProgressService;
pub use supervision_log::SupervisionLogService;
pub use user::UserService;
