//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Hours arrive as strings (numbers are accepted and stringified) and are
//! parsed strictly by the services.

use serde::{Deserialize, Deserializer};
use validator::Validate;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(f64),
}

/// Accept `"5.5"` or `5.5` for an hours field
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(raw.map(|amount| match amount {
        RawAmount::Text(text) => text,
        RawAmount::Number(number) => number.to_string(),
    }))
}

// ============================================================================
// Clinical Log Requests
// ============================================================================

/// Submit a clinical log for approval
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitClinicalLogRequest {
    /// ISO week, `YYYY-Www`
    #[validate(required(message = "week is required"))]
    pub week: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "directHours is required"))]
    pub direct_hours: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "indirectHours is required"))]
    pub indirect_hours: Option<String>,

    #[validate(
        required(message = "site is required"),
        length(min = 1, max = 200, message = "Site must be 1-200 characters")
    )]
    pub site: Option<String>,

    #[validate(required(message = "supervisorId is required"))]
    pub supervisor_id: Option<String>,
}

/// Supervisor decision on a pending log
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResolveClinicalLogRequest {
    /// `accepted` or `declined`
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

/// Query parameters for clinical log listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicalLogQuery {
    pub week: Option<String>,
    pub status: Option<String>,
}

// ============================================================================
// Supervision Log Requests
// ============================================================================

/// Record supervision hours
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupervisionLogRequest {
    #[validate(required(message = "week is required"))]
    pub week: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "supervisionHours is required"))]
    pub supervision_hours: Option<String>,
}

/// Query parameters for supervision log listings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisionLogQuery {
    /// Defaults to the caller
    pub user_id: Option<String>,
    pub week: Option<String>,
}

// ============================================================================
// Goal Requests
// ============================================================================

/// Create a goal row
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    /// Subject of the goal, defaults to the caller
    pub user_id: Option<String>,

    /// ISO week or `global`
    #[validate(required(message = "week is required"))]
    pub week: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "clinicalHoursTarget is required"))]
    pub clinical_hours_target: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "supervisionHoursTarget is required"))]
    pub supervision_hours_target: Option<String>,
}

/// Change the targets of an existing goal row
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    #[validate(required(message = "week is required"))]
    pub week: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "clinicalHoursTarget is required"))]
    pub clinical_hours_target: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "supervisionHoursTarget is required"))]
    pub supervision_hours_target: Option<String>,
}

/// Targets for an upsert addressed by path
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetGoalRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "clinicalHoursTarget is required"))]
    pub clinical_hours_target: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "supervisionHoursTarget is required"))]
    pub supervision_hours_target: Option<String>,
}

// ============================================================================
// Progress Requests
// ============================================================================

/// Query parameters for the progress overview
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressQuery {
    /// Restrict to one ISO week; all weeks when absent
    pub week: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Create a profile for an account issued by the identity provider
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProvisionProfileRequest {
    /// Account id; required when provisioning someone else
    pub id: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// `user`, `supervisor` or `admin`; defaults to `user`
    pub role: Option<String>,
}

/// Admin role change
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

/// Link a supervisee to a supervisor
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LinkSuperviseeRequest {
    #[validate(length(min = 1, message = "superviseeId is required"))]
    pub supervisee_id: String,
}
