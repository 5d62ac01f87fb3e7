//! Goal service
//!
//! Goals are owned by their subject user. A linked supervisor of that user and
//! admins may set them too. At most one goal exists per (user, week), where the
//! week may also be `global`.

use hours_core::entities::Goal;
use hours_core::value_objects::Hours;
use hours_core::{Actor, DomainError};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{CreateGoalRequest, GoalResponse, SetGoalRequest, UpdateGoalRequest};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::input::{parse_hours, parse_id, parse_period, required};

/// Goal service
pub struct GoalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GoalService<'a> {
    /// Create a new GoalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a goal; conflicts if the (user, week) pair already has one
    #[instrument(skip(self, request))]
    pub async fn create_goal(
        &self,
        actor: Actor,
        request: CreateGoalRequest,
    ) -> ServiceResult<GoalResponse> {
        request.validate()?;

        let user_id = match request.user_id.as_deref() {
            Some(raw) => parse_id("userId", raw)?,
            None => actor.user_id,
        };
        let period = parse_period("week", required("week", request.week.as_ref())?)?;
        let (clinical, supervision) = Self::parse_targets(
            request.clinical_hours_target.as_ref(),
            request.supervision_hours_target.as_ref(),
        )?;

        AccessService::new(self.ctx)
            .require_user_access(actor, user_id)
            .await?;

        let goal = Goal::new(user_id, period, clinical, supervision);
        self.ctx.goal_repo().create(&goal).await?;

        info!(goal_id = %goal.id, user_id = %user_id, period = %period, "Goal created");

        Ok(GoalResponse::from(&goal))
    }

    /// Change the targets of an existing goal
    #[instrument(skip(self, request))]
    pub async fn update_goal(
        &self,
        actor: Actor,
        user_id: Uuid,
        request: UpdateGoalRequest,
    ) -> ServiceResult<GoalResponse> {
        request.validate()?;

        let period = parse_period("week", required("week", request.week.as_ref())?)?;
        let (clinical, supervision) = Self::parse_targets(
            request.clinical_hours_target.as_ref(),
            request.supervision_hours_target.as_ref(),
        )?;

        AccessService::new(self.ctx)
            .require_user_access(actor, user_id)
            .await?;

        let mut goal = self
            .ctx
            .goal_repo()
            .find(user_id, period)
            .await?
            .ok_or(DomainError::GoalNotFound { user_id, period })?;

        goal.set_targets(clinical, supervision);
        self.ctx.goal_repo().update(user_id, &goal).await?;

        info!(goal_id = %goal.id, user_id = %user_id, period = %period, "Goal updated");

        Ok(GoalResponse::from(&goal))
    }

    /// Create the goal for (user, period) or overwrite its targets
    #[instrument(skip(self, request))]
    pub async fn set_goal(
        &self,
        actor: Actor,
        user_id: Uuid,
        period: &str,
        request: SetGoalRequest,
    ) -> ServiceResult<GoalResponse> {
        request.validate()?;

        let period = parse_period("week", period)?;
        let (clinical, supervision) = Self::parse_targets(
            request.clinical_hours_target.as_ref(),
            request.supervision_hours_target.as_ref(),
        )?;

        AccessService::new(self.ctx)
            .require_user_access(actor, user_id)
            .await?;

        let goal = match self.ctx.goal_repo().find(user_id, period).await? {
            Some(mut goal) => {
                goal.set_targets(clinical, supervision);
                self.ctx.goal_repo().update(user_id, &goal).await?;
                goal
            }
            None => {
                let goal = Goal::new(user_id, period, clinical, supervision);
                self.ctx.goal_repo().create(&goal).await?;
                goal
            }
        };

        info!(goal_id = %goal.id, user_id = %user_id, period = %period, "Goal set");

        Ok(GoalResponse::from(&goal))
    }

    /// All goals of a user, global first then by week
    #[instrument(skip(self))]
    pub async fn list_goals(&self, actor: Actor, user_id: Uuid) -> ServiceResult<Vec<GoalResponse>> {
        AccessService::new(self.ctx)
            .require_user_access(actor, user_id)
            .await?;

        let mut goals = self.ctx.goal_repo().list(user_id).await?;
        goals.sort_by_key(|g| g.period);
        Ok(goals.iter().map(GoalResponse::from).collect())
    }

    fn parse_targets(
        clinical: Option<&String>,
        supervision: Option<&String>,
    ) -> ServiceResult<(Hours, Hours)> {
        Ok((
            parse_hours(
                "clinicalHoursTarget",
                required("clinicalHoursTarget", clinical)?,
            )?,
            parse_hours(
                "supervisionHoursTarget",
                required("supervisionHoursTarget", supervision)?,
            )?,
        ))
    }
}
