//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod clinical_logs;
pub mod export;
pub mod goals;
pub mod health;
pub mod profiles;
pub mod progress;
pub mod supervision_logs;
pub mod supervisors;
