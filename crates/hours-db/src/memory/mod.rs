//! In-memory record store
//!
//! Implements the same repository traits as the PostgreSQL adapters, with the
//! same conditional-update and uniqueness semantics. Used by service tests and
//! by the `memory` storage backend.

mod clinical_log;
mod goal;
mod profile;
mod supervisee;
mod supervision_log;

pub use clinical_log::MemoryClinicalLogRepository;
pub use goal::MemoryGoalRepository;
pub use profile::MemoryUserProfileRepository;
pub use supervisee::MemorySuperviseeRepository;
pub use supervision_log::MemorySupervisionLogRepository;
