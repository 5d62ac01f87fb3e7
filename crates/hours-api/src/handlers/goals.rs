//! Goal handlers
//!
//! Endpoints for per-week and global goal targets.

use axum::{
    extract::{Path, State},
    Json,
};
use hours_service::{CreateGoalRequest, GoalResponse, GoalService, SetGoalRequest, UpdateGoalRequest};

use crate::extractors::{resolve_user_id, CurrentActor, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a goal
///
/// POST /goals
pub async fn create_goal(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ValidatedJson(request): ValidatedJson<CreateGoalRequest>,
) -> ApiResult<Created<Json<GoalResponse>>> {
    let service = GoalService::new(state.service_context());
    let response = service.create_goal(actor, request).await?;
    Ok(Created(Json(response)))
}

/// Goals of a user
///
/// GET /users/{user_id}/goals
pub async fn list_goals(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<GoalResponse>>> {
    let user_id = resolve_user_id(&user_id, actor)?;

    let service = GoalService::new(state.service_context());
    let goals = service.list_goals(actor, user_id).await?;
    Ok(Json(goals))
}

/// Change the targets of an existing goal; the week is in the body
///
/// PATCH /users/{user_id}/goals
pub async fn update_goal(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGoalRequest>,
) -> ApiResult<Json<GoalResponse>> {
    let user_id = resolve_user_id(&user_id, actor)?;

    let service = GoalService::new(state.service_context());
    let response = service.update_goal(actor, user_id, request).await?;
    Ok(Json(response))
}

/// Create or overwrite the goal for one week (or `global`)
///
/// PUT /users/{user_id}/goals/{week}
pub async fn set_goal(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path((user_id, week)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<SetGoalRequest>,
) -> ApiResult<Json<GoalResponse>> {
    let user_id = resolve_user_id(&user_id, actor)?;

    let service = GoalService::new(state.service_context());
    let response = service.set_goal(actor, user_id, &week, request).await?;
    Ok(Json(response))
}
