//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ClinicalLogQuery, CreateGoalRequest, CreateSupervisionLogRequest, LinkSuperviseeRequest,
    ProgressQuery, ProvisionProfileRequest, ResolveClinicalLogRequest, SetGoalRequest,
    SubmitClinicalLogRequest, SupervisionLogQuery, UpdateGoalRequest, UpdateRoleRequest,
};

// Re-export commonly used response types
pub use responses::{
    ClinicalLogResponse, CsvExport, GoalResponse, HealthChecks, HealthResponse, ProfileResponse,
    ProgressOverviewResponse, ReadinessResponse, SheetResponse, SupervisionLogResponse,
    WeekProgressResponse, WeeklyBreakdownResponse, WorkbookResponse,
};

// Re-export mappers and helper structs
pub use mappers::WorkbookFor;
