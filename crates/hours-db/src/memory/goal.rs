//! In-memory implementation of GoalRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use hours_core::entities::Goal;
use hours_core::error::DomainError;
use hours_core::traits::{GoalRepository, RepoResult};
use hours_core::value_objects::GoalPeriod;

/// Keeps at most one goal per (user, period)
#[derive(Debug, Default)]
pub struct MemoryGoalRepository {
    goals: RwLock<Vec<Goal>>,
}

impl MemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GoalRepository for MemoryGoalRepository {
    async fn create(&self, goal: &Goal) -> RepoResult<()> {
        let mut goals = self.goals.write();
        if goals
            .iter()
            .any(|g| g.user_id == goal.user_id && g.period == goal.period)
        {
            return Err(DomainError::GoalAlreadyExists {
                user_id: goal.user_id,
                period: goal.period,
            });
        }
        goals.push(goal.clone());
        Ok(())
    }

    async fn update(&self, user_id: Uuid, goal: &Goal) -> RepoResult<()> {
        let mut goals = self.goals.write();
        let existing = goals
            .iter_mut()
            .find(|g| g.user_id == user_id && g.period == goal.period)
            .ok_or(DomainError::GoalNotFound {
                user_id,
                period: goal.period,
            })?;

        existing.clinical_hours_target = goal.clinical_hours_target;
        existing.supervision_hours_target = goal.supervision_hours_target;
        existing.updated_at = Utc::now();
        Ok(())
    }

    async fn find(&self, user_id: Uuid, period: GoalPeriod) -> RepoResult<Option<Goal>> {
        Ok(self
            .goals
            .read()
            .iter()
            .find(|g| g.user_id == user_id && g.period == period)
            .cloned())
    }

    async fn list(&self, user_id: Uuid) -> RepoResult<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .read()
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();
        goals.sort_by_key(|g| g.period);
        Ok(goals)
    }
}
