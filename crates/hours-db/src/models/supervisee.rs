//! Supervisee relation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for supervisees table
#[derive(Debug, Clone, FromRow)]
pub struct SuperviseeModel {
    pub supervisor_id: Uuid,
    pub supervisee_id: Uuid,
    pub created_at: DateTime<Utc>,
}
