//! Supervision log service
//!
//! Supervision hours have no approval step; they count as soon as recorded.

use hours_core::entities::SupervisionLog;
use hours_core::traits::SupervisionLogFilter;
use hours_core::Actor;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{CreateSupervisionLogRequest, SupervisionLogResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::input::{parse_hours, parse_optional_week, parse_week, required};

/// Supervision log service
pub struct SupervisionLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SupervisionLogService<'a> {
    /// Create a new SupervisionLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record supervision hours for the actor
    #[instrument(skip(self, request), fields(user_id = %actor.user_id))]
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateSupervisionLogRequest,
    ) -> ServiceResult<SupervisionLogResponse> {
        request.validate()?;

        let week = parse_week("week", required("week", request.week.as_ref())?)?;
        let hours = parse_hours(
            "supervisionHours",
            required("supervisionHours", request.supervision_hours.as_ref())?,
        )?;

        let log = SupervisionLog::new(actor.user_id, week, hours);
        self.ctx.supervision_log_repo().create(&log).await?;

        info!(log_id = %log.id, week = %log.week, "Supervision log recorded");

        Ok(SupervisionLogResponse::from(&log))
    }

    /// Supervision logs of `user_id`, optionally for one week
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        actor: Actor,
        user_id: Uuid,
        week: Option<&str>,
    ) -> ServiceResult<Vec<SupervisionLogResponse>> {
        AccessService::new(self.ctx)
            .require_user_access(actor, user_id)
            .await?;

        let filter = SupervisionLogFilter::for_user(user_id)
            .with_week(parse_optional_week("week", week)?);
        let logs = self.ctx.supervision_log_repo().list(filter).await?;
        Ok(logs.iter().map(SupervisionLogResponse::from).collect())
    }
}
