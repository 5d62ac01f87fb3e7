//! Access service
//!
//! Decides whether an actor may read or manage another user's records.

use hours_core::{Actor, DomainError};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Access checks shared by the record-owning services
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check if `actor` is `user_id`, an admin, or a linked supervisor of `user_id`
    #[instrument(skip(self))]
    pub async fn can_manage_user(&self, actor: Actor, user_id: Uuid) -> ServiceResult<bool> {
        if actor.is_self_or_admin(user_id) {
            return Ok(true);
        }
        if !actor.is_supervisor() {
            return Ok(false);
        }

        let linked = self
            .ctx
            .supervisee_repo()
            .exists(actor.user_id, user_id)
            .await?;
        debug!(linked, "Checked supervisor relation");
        Ok(linked)
    }

    /// Require read/manage access to `user_id`'s records
    #[instrument(skip(self))]
    pub async fn require_user_access(&self, actor: Actor, user_id: Uuid) -> ServiceResult<()> {
        if self.can_manage_user(actor, user_id).await? {
            Ok(())
        } else {
            Err(DomainError::MissingPermission(format!("access to user {user_id}")).into())
        }
    }

    /// Require the admin role
    pub fn require_admin(&self, actor: Actor) -> ServiceResult<()> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(DomainError::MissingPermission("admin".to_string()).into())
        }
    }
}
