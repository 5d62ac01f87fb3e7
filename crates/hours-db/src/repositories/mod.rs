//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in hours-core.
//! Each repository handles database operations for one table.

mod clinical_log;
mod error;
mod goal;
mod profile;
mod supervisee;
mod supervision_log;

pub use clinical_log::PgClinicalLogRepository;
pub use goal::PgGoalRepository;
pub use profile::PgUserProfileRepository;
pub use supervisee::PgSuperviseeRepository;
pub use supervision_log::PgSupervisionLogRepository;
