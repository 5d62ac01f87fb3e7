//! PostgreSQL implementation of ClinicalLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use hours_core::entities::ClinicalLog;
use hours_core::traits::{
    ClinicalLogFilter, ClinicalLogRepository, DeleteOutcome, RepoResult, StatusUpdate,
};
use hours_core::value_objects::LogStatus;

use crate::mappers::ClinicalLogInsert;
use crate::models::ClinicalLogModel;

use super::error::{convert_rows, map_db_error};

/// PostgreSQL implementation of ClinicalLogRepository
#[derive(Clone)]
pub struct PgClinicalLogRepository {
    pool: PgPool,
}

impl PgClinicalLogRepository {
    /// Create a new PgClinicalLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Current stored status of a log, if it exists
    async fn stored_status(&self, id: Uuid) -> RepoResult<Option<LogStatus>> {
        let status = sqlx::query_scalar::<_, String>(
            r"
            SELECT status FROM clinical_logs WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        status
            .map(|s| {
                LogStatus::from_stored(&s)
                    .map_err(|e| crate::mappers::corrupt_row("clinical_logs", e))
            })
            .transpose()
    }
}

#[async_trait]
impl ClinicalLogRepository for PgClinicalLogRepository {
    #[instrument(skip(self, log), fields(log_id = %log.id))]
    async fn create(&self, log: &ClinicalLog) -> RepoResult<()> {
        let insert = ClinicalLogInsert::new(log);

        sqlx::query(
            r"
            INSERT INTO clinical_logs (id, created_at, week, user_id, supervisor_id,
                                       direct_hours, indirect_hours, site, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(log.id)
        .bind(log.created_at)
        .bind(&insert.week)
        .bind(log.user_id)
        .bind(log.supervisor_id)
        .bind(&insert.direct_hours)
        .bind(&insert.indirect_hours)
        .bind(insert.site)
        .bind(insert.status)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ClinicalLog>> {
        let result = sqlx::query_as::<_, ClinicalLogModel>(
            r"
            SELECT id, created_at, week, user_id, supervisor_id,
                   direct_hours, indirect_hours, site, status
            FROM clinical_logs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ClinicalLog::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ClinicalLogFilter) -> RepoResult<Vec<ClinicalLog>> {
        // Status is filtered after mapping so legacy spellings match their canonical form
        let rows = sqlx::query_as::<_, ClinicalLogModel>(
            r"
            SELECT id, created_at, week, user_id, supervisor_id,
                   direct_hours, indirect_hours, site, status
            FROM clinical_logs
            WHERE ($1::UUID IS NULL OR user_id = $1)
              AND ($2::UUID IS NULL OR supervisor_id = $2)
              AND ($3::TEXT IS NULL OR week = $3)
            ORDER BY week ASC, created_at ASC
            ",
        )
        .bind(filter.user_id)
        .bind(filter.supervisor_id)
        .bind(filter.week.map(|w| w.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let logs: Vec<ClinicalLog> = convert_rows(rows)?;
        Ok(logs.into_iter().filter(|log| filter.matches(log)).collect())
    }

    #[instrument(skip(self))]
    async fn update_status_if_pending(
        &self,
        id: Uuid,
        status: LogStatus,
    ) -> RepoResult<StatusUpdate> {
        let updated = sqlx::query_as::<_, ClinicalLogModel>(
            r"
            UPDATE clinical_logs
            SET status = $2
            WHERE id = $1 AND lower(btrim(status)) = 'pending'
            RETURNING id, created_at, week, user_id, supervisor_id,
                      direct_hours, indirect_hours, site, status
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = updated {
            return Ok(StatusUpdate::Updated(ClinicalLog::try_from(model)?));
        }

        Ok(match self.stored_status(id).await? {
            None => StatusUpdate::NotFound,
            Some(current) => StatusUpdate::AlreadyResolved(current),
        })
    }

    #[instrument(skip(self))]
    async fn delete_if_pending(&self, id: Uuid) -> RepoResult<DeleteOutcome> {
        let result = sqlx::query(
            r"
            DELETE FROM clinical_logs
            WHERE id = $1 AND lower(btrim(status)) = 'pending'
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            return Ok(DeleteOutcome::Deleted);
        }

        Ok(match self.stored_status(id).await? {
            None => DeleteOutcome::NotFound,
            Some(current) => DeleteOutcome::NotPending(current),
        })
    }
}
