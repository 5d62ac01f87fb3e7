//! Clinical log handlers
//!
//! Endpoints for the submit / review / resolve workflow.

use axum::{
    extract::{Path, State},
    Json,
};
use hours_service::{
    ClinicalLogQuery, ClinicalLogResponse, ClinicalLogService, ResolveClinicalLogRequest,
    SubmitClinicalLogRequest,
};

use crate::extractors::{parse_id, CurrentActor, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Submit a clinical log for approval
///
/// POST /clinical-logs
pub async fn submit_log(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ValidatedJson(request): ValidatedJson<SubmitClinicalLogRequest>,
) -> ApiResult<Created<Json<ClinicalLogResponse>>> {
    let service = ClinicalLogService::new(state.service_context());
    let response = service.submit(actor, request).await?;
    Ok(Created(Json(response)))
}

/// Caller's own logs
///
/// GET /clinical-logs?week=&status=
pub async fn list_own_logs(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    QueryParams(query): QueryParams<ClinicalLogQuery>,
) -> ApiResult<Json<Vec<ClinicalLogResponse>>> {
    let service = ClinicalLogService::new(state.service_context());
    let logs = service.list_own(actor, query).await?;
    Ok(Json(logs))
}

/// Logs awaiting or carrying the caller's decision
///
/// GET /clinical-logs/review?week=&status=
pub async fn review_queue(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    QueryParams(query): QueryParams<ClinicalLogQuery>,
) -> ApiResult<Json<Vec<ClinicalLogResponse>>> {
    let service = ClinicalLogService::new(state.service_context());
    let logs = service.list_for_supervisor(actor, query).await?;
    Ok(Json(logs))
}

/// Get log by ID
///
/// GET /clinical-logs/{log_id}
pub async fn get_log(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(log_id): Path<String>,
) -> ApiResult<Json<ClinicalLogResponse>> {
    let log_id = parse_id(&log_id, "log_id")?;

    let service = ClinicalLogService::new(state.service_context());
    let response = service.get(actor, log_id).await?;
    Ok(Json(response))
}

/// Accept or decline a pending log
///
/// PATCH /clinical-logs/{log_id}/status
pub async fn resolve_log(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(log_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ResolveClinicalLogRequest>,
) -> ApiResult<Json<ClinicalLogResponse>> {
    let log_id = parse_id(&log_id, "log_id")?;

    let service = ClinicalLogService::new(state.service_context());
    let response = service.resolve(actor, log_id, request).await?;
    Ok(Json(response))
}

/// Delete a pending log
///
/// DELETE /clinical-logs/{log_id}
pub async fn delete_log(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(log_id): Path<String>,
) -> ApiResult<NoContent> {
    let log_id = parse_id(&log_id, "log_id")?;

    let service = ClinicalLogService::new(state.service_context());
    service.delete(actor, log_id).await?;
    Ok(NoContent)
}
