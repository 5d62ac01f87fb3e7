//! Export handlers
//!
//! The workbook as JSON, or one sheet as a CSV download.

use axum::{
    extract::{Path, State},
    Json,
};
use hours_service::{ExportService, WorkbookResponse};

use crate::extractors::{resolve_user_id, CurrentActor};
use crate::response::{ApiResult, Csv};
use crate::state::AppState;

/// Both sheets as JSON
///
/// GET /users/{user_id}/export
pub async fn get_workbook(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(user_id): Path<String>,
) -> ApiResult<Json<WorkbookResponse>> {
    let user_id = resolve_user_id(&user_id, actor)?;

    let service = ExportService::new(state.service_context());
    let workbook = service.workbook(actor, user_id).await?;
    Ok(Json(workbook))
}

/// One sheet as CSV; the `.csv` suffix is optional
///
/// GET /users/{user_id}/export/{sheet}.csv
pub async fn get_sheet_csv(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path((user_id, sheet)): Path<(String, String)>,
) -> ApiResult<Csv> {
    let user_id = resolve_user_id(&user_id, actor)?;
    let slug = sheet.strip_suffix(".csv").unwrap_or(&sheet);

    let service = ExportService::new(state.service_context());
    let export = service.sheet_csv(actor, user_id, slug).await?;
    Ok(Csv(export))
}
