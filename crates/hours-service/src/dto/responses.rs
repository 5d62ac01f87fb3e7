//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! attribute names. Hours are raw, unrounded numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Profile Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Log Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalLogResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub week: String,
    pub user_id: String,
    pub supervisor_id: String,
    pub direct_hours: f64,
    pub indirect_hours: f64,
    pub site: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisionLogResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub week: String,
    pub user_id: String,
    pub supervision_hours: f64,
}

// ============================================================================
// Goal Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: String,
    pub user_id: String,
    /// ISO week or `global`
    pub week: String,
    pub clinical_hours_target: f64,
    pub supervision_hours_target: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Progress Responses
// ============================================================================

/// Totals and remaining hours; remaining never goes below zero
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverviewResponse {
    pub user_id: String,
    /// Week the overview is scoped to, `null` for all weeks
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

/// One week of the breakdown; remaining is negative once a target is exceeded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekProgressResponse {
    pub week: String,
    pub direct_hours: f64,
    pub indirect_hours: f64,
    pub clinical_hours: f64,
    pub supervision_hours: f64,
    pub clinical_goal: f64,
    pub supervision_goal: f64,
    pub clinical_remaining: f64,
    pub supervision_remaining: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBreakdownResponse {
    pub user_id: String,
    pub weeks: Vec<WeekProgressResponse>,
}

// ============================================================================
// Export Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetResponse {
    pub title: String,
    /// Path segment for the CSV download
    pub slug: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookResponse {
    pub user_id: String,
    pub sheets: Vec<SheetResponse>,
}

/// One sheet rendered as CSV
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub record_store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                record_store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinical_log_response_is_camel_case() {
        let response = ClinicalLogResponse {
            id: "1".to_string(),
            created_at: Utc::now(),
            week: "2024-W05".to_string(),
            user_id: "u".to_string(),
            supervisor_id: "s".to_string(),
            direct_hours: 5.0,
            indirect_hours: 3.5,
            site: "Clinic".to_string(),
            status: "pending".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["supervisorId"], "s");
        assert_eq!(json["directHours"], 5.0);
        assert_eq!(json["indirectHours"], 3.5);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.record_store, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
    }
}
