//! # hours-service
//!
//! Application layer containing the approval workflow, goal management,
//! progress aggregation, export and profile provisioning services, plus the
//! request/response DTOs they exchange with the API.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::*;
