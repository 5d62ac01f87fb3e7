//! Goal database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for goals table
#[derive(Debug, Clone, FromRow)]
pub struct GoalModel {
    pub id: Uuid,
    pub user_id: Uuid,
    /// `global` or an ISO week
    pub week: String,
    pub clinical_hours_target: String,
    pub supervision_hours_target: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
