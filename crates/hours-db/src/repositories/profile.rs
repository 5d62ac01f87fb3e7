//! PostgreSQL implementation of UserProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use hours_core::entities::UserProfile;
use hours_core::error::DomainError;
use hours_core::traits::{RepoResult, UserProfileRepository};
use hours_core::value_objects::Role;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserProfileRepository
#[derive(Clone)]
pub struct PgUserProfileRepository {
    pool: PgPool,
}

impl PgUserProfileRepository {
    /// Create a new PgUserProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for PgUserProfileRepository {
    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: &UserProfile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (id, name, email, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(profile.role.as_str())
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ProfileAlreadyExists(profile.id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<UserProfile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, name, email, role, created_at, updated_at
            FROM profiles
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserProfile::from))
    }

    #[instrument(skip(self))]
    async fn update_role(&self, id: Uuid, role: Role) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET role = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }
}
