//! User service
//!
//! Profile provisioning, role management and supervisor relations. Accounts
//! themselves live with the identity provider; this service keeps the profile
//! row and the supervisor/supervisee links.

use hours_core::entities::{SuperviseeRelation, UserProfile};
use hours_core::{Actor, DomainError, Role};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{LinkSuperviseeRequest, ProfileResponse, ProvisionProfileRequest, UpdateRoleRequest};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::input::{parse_id, parse_role};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a profile.
    ///
    /// A caller without a profile provisions their own account. A caller with
    /// a profile creates someone else's and may become linked to it: a
    /// supervisor creating a user supervises them, a user creating a
    /// supervisor is supervised by them. Only admins may create admins.
    /// A failed link is logged and does not undo the stored profile.
    #[instrument(skip(self, request))]
    pub async fn provision(
        &self,
        caller_id: Uuid,
        request: ProvisionProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;

        let role = match request.role.as_deref() {
            Some(raw) => parse_role("role", raw)?,
            None => Role::User,
        };
        let requested_id = request
            .id
            .as_deref()
            .map(|raw| parse_id("id", raw))
            .transpose()?;

        let creator = self.ctx.profile_repo().find_by_id(caller_id).await?;

        let id = match (&creator, requested_id) {
            // Self-provisioning
            (None, None) => caller_id,
            (None, Some(id)) if id == caller_id => caller_id,
            (None, Some(_)) => {
                return Err(ServiceError::validation(
                    "id must match the authenticated account when provisioning yourself",
                ));
            }
            (Some(_), None) => {
                return Err(ServiceError::validation(
                    "id is required when provisioning another account",
                ));
            }
            (Some(creator), Some(id)) if id == creator.id => {
                return Err(DomainError::ProfileAlreadyExists(id).into());
            }
            (Some(_), Some(id)) => id,
        };

        let creator_is_admin = creator.as_ref().is_some_and(|c| c.role == Role::Admin);
        if role == Role::Admin && !creator_is_admin {
            return Err(DomainError::MissingPermission("admin".to_string()).into());
        }

        let profile = UserProfile::new(id, request.name.trim().to_string(), request.email, role);
        self.ctx.profile_repo().create(&profile).await?;

        info!(profile_id = %profile.id, role = %profile.role, "Profile provisioned");

        if let Some(relation) = creator
            .as_ref()
            .and_then(|creator| SuperviseeRelation::for_provisioning(creator, &profile))
        {
            // The profile is already stored; a failed link is repaired via link_supervisee
            match self.ctx.supervisee_repo().create(&relation).await {
                Ok(()) => info!(
                    supervisor_id = %relation.supervisor_id,
                    supervisee_id = %relation.supervisee_id,
                    "Supervisee linked on provisioning"
                ),
                Err(e) => warn!(
                    supervisor_id = %relation.supervisor_id,
                    supervisee_id = %relation.supervisee_id,
                    error = %e,
                    "Supervisee link failed on provisioning"
                ),
            }
        }

        Ok(ProfileResponse::from(&profile))
    }

    /// Resolve the request-scoped actor for an authenticated account
    #[instrument(skip(self))]
    pub async fn current_actor(&self, user_id: Uuid) -> ServiceResult<Actor> {
        let profile = self.get_profile_entity(user_id).await?;
        Ok(Actor::new(profile.id, profile.role))
    }

    /// Profile of the actor
    #[instrument(skip(self))]
    pub async fn get_profile(&self, actor: Actor) -> ServiceResult<ProfileResponse> {
        let profile = self.get_profile_entity(actor.user_id).await?;
        Ok(ProfileResponse::from(&profile))
    }

    /// Get profile entity by ID
    #[instrument(skip(self))]
    pub async fn get_profile_entity(&self, user_id: Uuid) -> ServiceResult<UserProfile> {
        self.ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Change the role of a profile (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_role(
        &self,
        actor: Actor,
        user_id: Uuid,
        request: UpdateRoleRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;
        AccessService::new(self.ctx).require_admin(actor)?;
        let role = parse_role("role", &request.role)?;

        self.ctx.profile_repo().update_role(user_id, role).await?;
        let profile = self.get_profile_entity(user_id).await?;

        info!(profile_id = %user_id, role = %role, "Role updated");

        Ok(ProfileResponse::from(&profile))
    }

    /// Link a supervisee to a supervisor; the supervisor themself or an admin
    #[instrument(skip(self, request))]
    pub async fn link_supervisee(
        &self,
        actor: Actor,
        supervisor_id: Uuid,
        request: LinkSuperviseeRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;
        let supervisee_id = parse_id("superviseeId", &request.supervisee_id)?;

        if !actor.is_self_or_admin(supervisor_id) {
            return Err(DomainError::MissingPermission(format!(
                "manage supervisees of {supervisor_id}"
            ))
            .into());
        }
        if supervisor_id == supervisee_id {
            return Err(ServiceError::validation("a supervisor cannot supervise themself"));
        }

        let supervisor = self
            .ctx
            .profile_repo()
            .find_by_id(supervisor_id)
            .await?
            .ok_or(DomainError::SupervisorNotFound(supervisor_id))?;
        if supervisor.role == Role::User {
            return Err(ServiceError::validation(format!(
                "{supervisor_id} does not have the supervisor role"
            )));
        }
        let supervisee = self.get_profile_entity(supervisee_id).await?;

        self.ctx
            .supervisee_repo()
            .create(&SuperviseeRelation::new(supervisor_id, supervisee_id))
            .await?;

        info!(supervisor_id = %supervisor_id, supervisee_id = %supervisee_id, "Supervisee linked");

        Ok(ProfileResponse::from(&supervisee))
    }

    /// Profiles supervised by `supervisor_id`
    #[instrument(skip(self))]
    pub async fn list_supervisees(
        &self,
        actor: Actor,
        supervisor_id: Uuid,
    ) -> ServiceResult<Vec<ProfileResponse>> {
        if !actor.is_self_or_admin(supervisor_id) {
            return Err(DomainError::MissingPermission(format!(
                "view supervisees of {supervisor_id}"
            ))
            .into());
        }

        let relations = self.ctx.supervisee_repo().list_supervisees(supervisor_id).await?;
        let mut profiles = Vec::with_capacity(relations.len());
        for relation in relations {
            if let Some(profile) = self
                .ctx
                .profile_repo()
                .find_by_id(relation.supervisee_id)
                .await?
            {
                profiles.push(ProfileResponse::from(&profile));
            }
        }
        Ok(profiles)
    }
}
