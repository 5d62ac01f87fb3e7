//! Clinical log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for clinical_logs table
///
/// Hours and status are kept as text; see the mappers for coercion rules.
#[derive(Debug, Clone, FromRow)]
pub struct ClinicalLogModel {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub week: String,
    pub user_id: Uuid,
    pub supervisor_id: Uuid,
    pub direct_hours: String,
    pub indirect_hours: String,
    pub site: String,
    pub status: String,
}
