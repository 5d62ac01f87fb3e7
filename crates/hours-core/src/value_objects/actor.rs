//! Request-scoped identity
//!
//! Every workflow and aggregation call receives the acting user explicitly.

use uuid::Uuid;

use super::Role;

/// The authenticated user performing an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
}

impl Actor {
    pub const fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    #[inline]
    pub const fn is_supervisor(&self) -> bool {
        matches!(self.role, Role::Supervisor)
    }

    /// Check if the actor is `user_id` or an admin
    #[inline]
    pub fn is_self_or_admin(&self, user_id: Uuid) -> bool {
        self.user_id == user_id || self.is_admin()
    }
}
