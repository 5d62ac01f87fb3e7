//! Profile handlers
//!
//! Endpoints for provisioning profiles and managing roles.

use axum::{
    extract::{Path, State},
    Json,
};
use hours_service::{ProfileResponse, ProvisionProfileRequest, UpdateRoleRequest, UserService};

use crate::extractors::{resolve_user_id, AuthUser, CurrentActor, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Provision a profile for the caller or, when the caller has one, for another account
///
/// POST /profiles
pub async fn provision_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ProvisionProfileRequest>,
) -> ApiResult<Created<Json<ProfileResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.provision(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get current profile
///
/// GET /profiles/@me
pub async fn get_current_profile(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(actor).await?;
    Ok(Json(response))
}

/// Change the role of a profile (admin only)
///
/// PATCH /profiles/{id}/role
pub async fn update_role(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateRoleRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = resolve_user_id(&user_id, actor)?;

    let service = UserService::new(state.service_context());
    let response = service.update_role(actor, user_id, request).await?;
    Ok(Json(response))
}
