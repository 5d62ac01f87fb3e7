//! In-memory implementation of SuperviseeRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use hours_core::entities::SuperviseeRelation;
use hours_core::error::DomainError;
use hours_core::traits::{RepoResult, SuperviseeRepository};

#[derive(Debug, Default)]
pub struct MemorySuperviseeRepository {
    relations: RwLock<Vec<SuperviseeRelation>>,
}

impl MemorySuperviseeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SuperviseeRepository for MemorySuperviseeRepository {
    async fn create(&self, relation: &SuperviseeRelation) -> RepoResult<()> {
        let mut relations = self.relations.write();
        if relations.iter().any(|r| {
            r.supervisor_id == relation.supervisor_id && r.supervisee_id == relation.supervisee_id
        }) {
            return Err(DomainError::AlreadyLinked);
        }
        relations.push(relation.clone());
        Ok(())
    }

    async fn exists(&self, supervisor_id: Uuid, supervisee_id: Uuid) -> RepoResult<bool> {
        Ok(self
            .relations
            .read()
            .iter()
            .any(|r| r.supervisor_id == supervisor_id && r.supervisee_id == supervisee_id))
    }

    async fn list_supervisees(&self, supervisor_id: Uuid) -> RepoResult<Vec<SuperviseeRelation>> {
        Ok(self
            .relations
            .read()
            .iter()
            .filter(|r| r.supervisor_id == supervisor_id)
            .cloned()
            .collect())
    }
}
