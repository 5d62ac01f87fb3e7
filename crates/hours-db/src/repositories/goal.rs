//! PostgreSQL implementation of GoalRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use hours_core::entities::Goal;
use hours_core::error::DomainError;
use hours_core::traits::{GoalRepository, RepoResult};
use hours_core::value_objects::GoalPeriod;

use crate::mappers::GoalInsert;
use crate::models::GoalModel;

use super::error::{convert_rows, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GoalRepository
#[derive(Clone)]
pub struct PgGoalRepository {
    pool: PgPool,
}

impl PgGoalRepository {
    /// Create a new PgGoalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PgGoalRepository {
    #[instrument(skip(self, goal), fields(user_id = %goal.user_id, period = %goal.period))]
    async fn create(&self, goal: &Goal) -> RepoResult<()> {
        let insert = GoalInsert::new(goal);

        sqlx::query(
            r"
            INSERT INTO goals (id, user_id, week, clinical_hours_target,
                               supervision_hours_target, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(goal.id)
        .bind(goal.user_id)
        .bind(&insert.week)
        .bind(&insert.clinical_hours_target)
        .bind(&insert.supervision_hours_target)
        .bind(goal.created_at)
        .bind(goal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::GoalAlreadyExists {
                user_id: goal.user_id,
                period: goal.period,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, goal), fields(period = %goal.period))]
    async fn update(&self, user_id: Uuid, goal: &Goal) -> RepoResult<()> {
        let insert = GoalInsert::new(goal);

        let result = sqlx::query(
            r"
            UPDATE goals
            SET clinical_hours_target = $3, supervision_hours_target = $4, updated_at = NOW()
            WHERE user_id = $1 AND week = $2
            ",
        )
        .bind(user_id)
        .bind(&insert.week)
        .bind(&insert.clinical_hours_target)
        .bind(&insert.supervision_hours_target)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GoalNotFound {
                user_id,
                period: goal.period,
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: Uuid, period: GoalPeriod) -> RepoResult<Option<Goal>> {
        let result = sqlx::query_as::<_, GoalModel>(
            r"
            SELECT id, user_id, week, clinical_hours_target, supervision_hours_target,
                   created_at, updated_at
            FROM goals
            WHERE user_id = $1 AND week = $2
            ",
        )
        .bind(user_id)
        .bind(period.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Goal::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, user_id: Uuid) -> RepoResult<Vec<Goal>> {
        let rows = sqlx::query_as::<_, GoalModel>(
            r"
            SELECT id, user_id, week, clinical_hours_target, supervision_hours_target,
                   created_at, updated_at
            FROM goals
            WHERE user_id = $1
            ORDER BY week ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_rows(rows)
    }
}
