//! PostgreSQL implementation of SuperviseeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use hours_core::entities::SuperviseeRelation;
use hours_core::error::DomainError;
use hours_core::traits::{RepoResult, SuperviseeRepository};

use crate::models::SuperviseeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of SuperviseeRepository
#[derive(Clone)]
pub struct PgSuperviseeRepository {
    pool: PgPool,
}

impl PgSuperviseeRepository {
    /// Create a new PgSuperviseeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SuperviseeRepository for PgSuperviseeRepository {
    #[instrument(skip(self, relation), fields(supervisor_id = %relation.supervisor_id, supervisee_id = %relation.supervisee_id))]
    async fn create(&self, relation: &SuperviseeRelation) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO supervisees (supervisor_id, supervisee_id, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(relation.supervisor_id)
        .bind(relation.supervisee_id)
        .bind(relation.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyLinked))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, supervisor_id: Uuid, supervisee_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM supervisees WHERE supervisor_id = $1 AND supervisee_id = $2
            )
            ",
        )
        .bind(supervisor_id)
        .bind(supervisee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list_supervisees(&self, supervisor_id: Uuid) -> RepoResult<Vec<SuperviseeRelation>> {
        let rows = sqlx::query_as::<_, SuperviseeModel>(
            r"
            SELECT supervisor_id, supervisee_id, created_at
            FROM supervisees
            WHERE supervisor_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(supervisor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SuperviseeRelation::from).collect())
    }
}
