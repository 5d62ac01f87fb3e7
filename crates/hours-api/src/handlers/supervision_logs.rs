//! Supervision log handlers

use axum::{extract::State, Json};
use hours_service::{
    CreateSupervisionLogRequest, SupervisionLogQuery, SupervisionLogResponse, SupervisionLogService,
};

use crate::extractors::{resolve_user_id, CurrentActor, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record supervision hours for the caller
///
/// POST /supervision-logs
pub async fn create_log(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ValidatedJson(request): ValidatedJson<CreateSupervisionLogRequest>,
) -> ApiResult<Created<Json<SupervisionLogResponse>>> {
    let service = SupervisionLogService::new(state.service_context());
    let response = service.create(actor, request).await?;
    Ok(Created(Json(response)))
}

/// Supervision logs of a user, the caller by default
///
/// GET /supervision-logs?userId=&week=
pub async fn list_logs(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    QueryParams(query): QueryParams<SupervisionLogQuery>,
) -> ApiResult<Json<Vec<SupervisionLogResponse>>> {
    let user_id = match query.user_id.as_deref() {
        Some(raw) => resolve_user_id(raw, actor)?,
        None => actor.user_id,
    };

    let service = SupervisionLogService::new(state.service_context());
    let logs = service.list(actor, user_id, query.week.as_deref()).await?;
    Ok(Json(logs))
}
