//! In-memory implementation of ClinicalLogRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use hours_core::entities::ClinicalLog;
use hours_core::traits::{
    ClinicalLogFilter, ClinicalLogRepository, DeleteOutcome, RepoResult, StatusUpdate,
};
use hours_core::value_objects::LogStatus;

#[derive(Debug, Default)]
pub struct MemoryClinicalLogRepository {
    logs: RwLock<Vec<ClinicalLog>>,
}

impl MemoryClinicalLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClinicalLogRepository for MemoryClinicalLogRepository {
    async fn create(&self, log: &ClinicalLog) -> RepoResult<()> {
        self.logs.write().push(log.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ClinicalLog>> {
        Ok(self.logs.read().iter().find(|log| log.id == id).cloned())
    }

    async fn list(&self, filter: ClinicalLogFilter) -> RepoResult<Vec<ClinicalLog>> {
        let mut logs: Vec<ClinicalLog> = self
            .logs
            .read()
            .iter()
            .filter(|log| filter.matches(log))
            .cloned()
            .collect();
        logs.sort_by(|a, b| a.week.cmp(&b.week).then(a.created_at.cmp(&b.created_at)));
        Ok(logs)
    }

    async fn update_status_if_pending(
        &self,
        id: Uuid,
        status: LogStatus,
    ) -> RepoResult<StatusUpdate> {
        let mut logs = self.logs.write();
        let Some(log) = logs.iter_mut().find(|log| log.id == id) else {
            return Ok(StatusUpdate::NotFound);
        };

        if log.status != LogStatus::Pending {
            return Ok(StatusUpdate::AlreadyResolved(log.status));
        }

        log.status = status;
        Ok(StatusUpdate::Updated(log.clone()))
    }

    async fn delete_if_pending(&self, id: Uuid) -> RepoResult<DeleteOutcome> {
        let mut logs = self.logs.write();
        let Some(index) = logs.iter().position(|log| log.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        let status = logs[index].status;
        if status != LogStatus::Pending {
            return Ok(DeleteOutcome::NotPending(status));
        }

        logs.remove(index);
        Ok(DeleteOutcome::Deleted)
    }
}
