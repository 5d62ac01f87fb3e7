//! Supervisor handlers
//!
//! Endpoints for supervisor/supervisee relations.

use axum::{
    extract::{Path, State},
    Json,
};
use hours_service::{LinkSuperviseeRequest, ProfileResponse, UserService};

use crate::extractors::{resolve_user_id, CurrentActor, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the supervisees of a supervisor
///
/// GET /supervisors/{id}/supervisees
pub async fn list_supervisees(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(supervisor_id): Path<String>,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let supervisor_id = resolve_user_id(&supervisor_id, actor)?;

    let service = UserService::new(state.service_context());
    let supervisees = service.list_supervisees(actor, supervisor_id).await?;
    Ok(Json(supervisees))
}

/// Link a supervisee to a supervisor
///
/// POST /supervisors/{id}/supervisees
pub async fn link_supervisee(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(supervisor_id): Path<String>,
    ValidatedJson(request): ValidatedJson<LinkSuperviseeRequest>,
) -> ApiResult<Created<Json<ProfileResponse>>> {
    let supervisor_id = resolve_user_id(&supervisor_id, actor)?;

    let service = UserService::new(state.service_context());
    let supervisee = service.link_supervisee(actor, supervisor_id, request).await?;
    Ok(Created(Json(supervisee)))
}
