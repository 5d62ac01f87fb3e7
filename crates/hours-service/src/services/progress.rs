//! Progress service
//!
//! Loads a user's rows from the record store and runs the aggregation engine.

use hours_core::traits::{ClinicalLogFilter, SupervisionLogFilter};
use hours_core::{compute_overview, weekly_breakdown, Actor, LogStatus, WeekFilter};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::dto::{ProgressOverviewResponse, WeekProgressResponse, WeeklyBreakdownResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::input::parse_optional_week;

/// Progress service
pub struct ProgressService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProgressService<'a> {
    /// Create a new ProgressService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Totals against goals for all weeks or one week; remaining is clamped at zero
    #[instrument(skip(self))]
    pub async fn overview(
        &self,
        actor: Actor,
        user_id: Uuid,
        week: Option<&str>,
    ) -> ServiceResult<ProgressOverviewResponse> {
        let week = parse_optional_week("week", week)?;
        AccessService::new(self.ctx)
            .require_user_access(actor, user_id)
            .await?;

        let clinical = self
            .ctx
            .clinical_log_repo()
            .list(
                ClinicalLogFilter::for_user(user_id)
                    .with_week(week)
                    .with_status(Some(LogStatus::Accepted)),
            )
            .await?;
        let supervision = self
            .ctx
            .supervision_log_repo()
            .list(SupervisionLogFilter::for_user(user_id).with_week(week))
            .await?;
        let goals = self.ctx.goal_repo().list(user_id).await?;

        let overview = compute_overview(
            user_id,
            &clinical,
            &supervision,
            &goals,
            WeekFilter::from(week),
            self.ctx.goal_defaults(),
        );
        debug!(
            clinical_logs = clinical.len(),
            supervision_logs = supervision.len(),
            goals = goals.len(),
            "Computed progress overview"
        );

        Ok(ProgressOverviewResponse::from(&overview))
    }

    /// Per-week totals with signed remaining hours
    #[instrument(skip(self))]
    pub async fn weekly_breakdown(
        &self,
        actor: Actor,
        user_id: Uuid,
    ) -> ServiceResult<WeeklyBreakdownResponse> {
        AccessService::new(self.ctx)
            .require_user_access(actor, user_id)
            .await?;

        let clinical = self
            .ctx
            .clinical_log_repo()
            .list(ClinicalLogFilter::for_user(user_id).with_status(Some(LogStatus::Accepted)))
            .await?;
        let supervision = self
            .ctx
            .supervision_log_repo()
            .list(SupervisionLogFilter::for_user(user_id))
            .await?;
        let goals = self.ctx.goal_repo().list(user_id).await?;

        let weeks = weekly_breakdown(user_id, &clinical, &supervision, &goals);

        Ok(WeeklyBreakdownResponse {
            user_id: user_id.to_string(),
            weeks: weeks.iter().map(WeekProgressResponse::from).collect(),
        })
    }
}
