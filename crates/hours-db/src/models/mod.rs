//! Database models - SQLx-compatible structs for PostgreSQL tables

mod clinical_log;
mod goal;
mod profile;
mod supervisee;
mod supervision_log;

pub use clinical_log::ClinicalLogModel;
pub use goal::GoalModel;
pub use profile::ProfileModel;
pub use supervisee::SuperviseeModel;
pub use supervision_log::SupervisionLogModel;
