//! PostgreSQL implementation of SupervisionLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hours_core::entities::SupervisionLog;
use hours_core::traits::{RepoResult, SupervisionLogFilter, SupervisionLogRepository};

use crate::mappers::SupervisionLogInsert;
use crate::models::SupervisionLogModel;

use super::error::{convert_rows, map_db_error};

/// PostgreSQL implementation of SupervisionLogRepository
#[derive(Clone)]
pub struct PgSupervisionLogRepository {
    pool: PgPool,
}

impl PgSupervisionLogRepository {
    /// Create a new PgSupervisionLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupervisionLogRepository for PgSupervisionLogRepository {
    #[instrument(skip(self, log), fields(log_id = %log.id))]
    async fn create(&self, log: &SupervisionLog) -> RepoResult<()> {
        let insert = SupervisionLogInsert::new(log);

        sqlx::query(
            r"
            INSERT INTO supervision_logs (id, created_at, week, user_id, supervision_hours)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(log.id)
        .bind(log.created_at)
        .bind(&insert.week)
        .bind(log.user_id)
        .bind(&insert.supervision_hours)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: SupervisionLogFilter) -> RepoResult<Vec<SupervisionLog>> {
        let rows = sqlx::query_as::<_, SupervisionLogModel>(
            r"
            SELECT id, created_at, week, user_id, supervision_hours
            FROM supervision_logs
            WHERE user_id = $1
              AND ($2::TEXT IS NULL OR week = $2)
            ORDER BY week ASC, created_at ASC
            ",
        )
        .bind(filter.user_id)
        .bind(filter.week.map(|w| w.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSupervisionLogRepository>();
    }
}
