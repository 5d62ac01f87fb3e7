//! Supervision log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for supervision_logs table
#[derive(Debug, Clone, FromRow)]
pub struct SupervisionLogModel {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub week: String,
    pub user_id: Uuid,
    pub supervision_hours: String,
}
