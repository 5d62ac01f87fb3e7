//! In-memory implementation of SupervisionLogRepository

use async_trait::async_trait;
use parking_lot::RwLock;

use hours_core::entities::SupervisionLog;
use hours_core::traits::{RepoResult, SupervisionLogFilter, SupervisionLogRepository};

#[derive(Debug, Default)]
pub struct MemorySupervisionLogRepository {
    logs: RwLock<Vec<SupervisionLog>>,
}

impl MemorySupervisionLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SupervisionLogRepository for MemorySupervisionLogRepository {
    async fn create(&self, log: &SupervisionLog) -> RepoResult<()> {
        self.logs.write().push(log.clone());
        Ok(())
    }

    async fn list(&self, filter: SupervisionLogFilter) -> RepoResult<Vec<SupervisionLog>> {
        let mut logs: Vec<SupervisionLog> = self
            .logs
            .read()
            .iter()
            .filter(|log| filter.matches(log))
            .cloned()
            .collect();
        logs.sort_by(|a, b| a.week.cmp(&b.week).then(a.created_at.cmp(&b.created_at)));
        Ok(logs)
    }
}
