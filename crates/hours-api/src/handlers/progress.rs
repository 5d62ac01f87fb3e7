//! Progress handlers

use axum::{
    extract::{Path, State},
    Json,
};
use hours_service::{
    ProgressOverviewResponse, ProgressQuery, ProgressService, WeeklyBreakdownResponse,
};

use crate::extractors::{resolve_user_id, CurrentActor, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Totals against goals, optionally for one week
///
/// GET /users/{user_id}/progress?week=
pub async fn get_overview(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(user_id): Path<String>,
    QueryParams(query): QueryParams<ProgressQuery>,
) -> ApiResult<Json<ProgressOverviewResponse>> {
    let user_id = resolve_user_id(&user_id, actor)?;

    let service = ProgressService::new(state.service_context());
    let overview = service.overview(actor, user_id, query.week.as_deref()).await?;
    Ok(Json(overview))
}

/// Per-week breakdown with signed remaining hours
///
/// GET /users/{user_id}/progress/weekly
pub async fn get_weekly_breakdown(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(user_id): Path<String>,
) -> ApiResult<Json<WeeklyBreakdownResponse>> {
    let user_id = resolve_user_id(&user_id, actor)?;

    let service = ProgressService::new(state.service_context());
    let breakdown = service.weekly_breakdown(actor, user_id).await?;
    Ok(Json(breakdown))
}
