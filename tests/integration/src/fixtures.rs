//! Test fixtures and data generators
//!
//! Request builders and typed views of the API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Requests
// ============================================================================

/// Profile provisioning request
#[derive(Debug, Serialize)]
pub struct ProvisionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl ProvisionRequest {
    /// Provision the caller's own account
    pub fn own(role: &str) -> Self {
        Self {
            id: None,
            name: format!("Test {role}"),
            email: format!("{}@example.com", Uuid::new_v4()),
            role: role.to_string(),
        }
    }

    /// Provision another account
    pub fn other(id: Uuid, role: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::own(role)
        }
    }
}

/// Clinical log submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLogRequest {
    pub week: String,
    pub direct_hours: String,
    pub indirect_hours: String,
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
}

impl SubmitLogRequest {
    pub fn new(week: &str, direct: &str, indirect: &str, supervisor_id: Uuid) -> Self {
        Self {
            week: week.to_string(),
            direct_hours: direct.to_string(),
            indirect_hours: indirect.to_string(),
            site: "Community Clinic".to_string(),
            supervisor_id: Some(supervisor_id.to_string()),
        }
    }
}

/// Supervisor decision
#[derive(Debug, Serialize)]
pub struct ResolveRequest {
    pub status: String,
}

impl ResolveRequest {
    pub fn accepted() -> Self {
        Self {
            status: "accepted".to_string(),
        }
    }

    pub fn declined() -> Self {
        Self {
            status: "declined".to_string(),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalLogView {
    pub id: String,
    pub week: String,
    pub user_id: String,
    pub supervisor_id: String,
    pub direct_hours: f64,
    pub indirect_hours: f64,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    pub week: Option<String>,
    pub total_direct: f64,
    pub total_indirect: f64,
    pub total_clinical: f64,
    pub total_supervision: f64,
    pub clinical_goal: f64,
    pub supervision_goal: f64,
    pub clinical_remaining: f64,
    pub supervision_remaining: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    pub week: String,
    pub clinical_hours: f64,
    pub clinical_remaining: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownView {
    pub weeks: Vec<WeekView>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    pub title: String,
    pub slug: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookView {
    pub sheets: Vec<SheetView>,
}
