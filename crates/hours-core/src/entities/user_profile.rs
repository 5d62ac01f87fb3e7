//! User profile entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Role;

/// Profile row for an account issued by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(id: Uuid, name: String, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name for display, falling back to the email address
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}
