//! Supervisee relation - link between a supervising and a supervised account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Role;

use super::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperviseeRelation {
    pub supervisor_id: Uuid,
    pub supervisee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl SuperviseeRelation {
    pub fn new(supervisor_id: Uuid, supervisee_id: Uuid) -> Self {
        Self {
            supervisor_id,
            supervisee_id,
            created_at: Utc::now(),
        }
    }

    /// Relation created when `creator` provisions `created`.
    ///
    /// A supervisor creating a user account becomes that user's supervisor; a
    /// user creating a supervisor account becomes that supervisor's supervisee.
    /// Any other pairing produces no relation.
    pub fn for_provisioning(creator: &UserProfile, created: &UserProfile) -> Option<Self> {
        match (creator.role, created.role) {
            (Role::Supervisor, Role::User) => Some(Self::new(creator.id, created.id)),
            (Role::User, Role::Supervisor) => Some(Self::new(created.id, creator.id)),
            _ => None,
        }
    }
}
