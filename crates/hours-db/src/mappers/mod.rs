//! Entity to model mappers
//!
//! Conversions between domain entities (hours-core) and database models.
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects,
//!   coercing loosely typed columns
//! - `*Insert` structs: Prepare entity data for database writes

mod clinical_log;
mod goal;
mod profile;
mod supervisee;
mod supervision_log;

pub use clinical_log::ClinicalLogInsert;
pub use goal::GoalInsert;
pub use supervision_log::SupervisionLogInsert;

use hours_core::error::DomainError;

/// Error for a row whose text columns cannot be interpreted
pub(crate) fn corrupt_row(table: &str, detail: impl std::fmt::Display) -> DomainError {
    DomainError::DatabaseError(format!("unreadable {table} row: {detail}"))
}
