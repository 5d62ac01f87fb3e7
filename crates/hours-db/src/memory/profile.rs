//! In-memory implementation of UserProfileRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use hours_core::entities::UserProfile;
use hours_core::error::DomainError;
use hours_core::traits::{RepoResult, UserProfileRepository};
use hours_core::value_objects::Role;

#[derive(Debug, Default)]
pub struct MemoryUserProfileRepository {
    profiles: RwLock<HashMap<Uuid, UserProfile>>,
}

impl MemoryUserProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserProfileRepository for MemoryUserProfileRepository {
    async fn create(&self, profile: &UserProfile) -> RepoResult<()> {
        let mut profiles = self.profiles.write();
        if profiles.contains_key(&profile.id) {
            return Err(DomainError::ProfileAlreadyExists(profile.id));
        }
        profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<UserProfile>> {
        Ok(self.profiles.read().get(&id).cloned())
    }

    async fn update_role(&self, id: Uuid, role: Role) -> RepoResult<()> {
        let mut profiles = self.profiles.write();
        let profile = profiles.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        profile.role = role;
        profile.updated_at = Utc::now();
        Ok(())
    }
}
