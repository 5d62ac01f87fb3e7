//! Clinical log service
//!
//! Submission, supervisor resolution and withdrawal of clinical hour logs.
//! A log starts `pending`; its supervisor (or an admin) moves it once to
//! `accepted` or `declined`, after which it is immutable.

use hours_core::entities::{ClinicalLog, UserProfile};
use hours_core::traits::{ClinicalLogFilter, DeleteOutcome, StatusUpdate, SubmissionNotice};
use hours_core::{Actor, DomainError};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{
    ClinicalLogQuery, ClinicalLogResponse, ResolveClinicalLogRequest, SubmitClinicalLogRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::input::{
    parse_hours, parse_id, parse_optional_status, parse_optional_week, parse_status, parse_week,
    required,
};

/// Clinical log service
pub struct ClinicalLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClinicalLogService<'a> {
    /// Create a new ClinicalLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a log for approval and notify the named supervisor.
    ///
    /// The notice is fire-and-forget: submission returns once the log is
    /// stored, and a failed or slow dispatch is only logged.
    #[instrument(skip(self, request), fields(user_id = %actor.user_id))]
    pub async fn submit(
        &self,
        actor: Actor,
        request: SubmitClinicalLogRequest,
    ) -> ServiceResult<ClinicalLogResponse> {
        request.validate()?;

        let week = parse_week("week", required("week", request.week.as_ref())?)?;
        let direct_hours = parse_hours(
            "directHours",
            required("directHours", request.direct_hours.as_ref())?,
        )?;
        let indirect_hours = parse_hours(
            "indirectHours",
            required("indirectHours", request.indirect_hours.as_ref())?,
        )?;
        let site = required("site", request.site.as_ref())?.trim().to_string();
        let supervisor_id = parse_id(
            "supervisorId",
            required("supervisorId", request.supervisor_id.as_ref())?,
        )?;

        let supervisor = self
            .ctx
            .profile_repo()
            .find_by_id(supervisor_id)
            .await?
            .ok_or_else(|| {
                ServiceError::validation(format!("supervisorId does not name a known account: {supervisor_id}"))
            })?;

        let log = ClinicalLog::new(
            actor.user_id,
            supervisor_id,
            week,
            direct_hours,
            indirect_hours,
            site,
        );
        self.ctx.clinical_log_repo().create(&log).await?;

        info!(log_id = %log.id, supervisor_id = %supervisor_id, week = %log.week, "Clinical log submitted");

        self.notify_supervisor(&supervisor, &log);

        Ok(ClinicalLogResponse::from(&log))
    }

    /// Accept or decline a pending log.
    ///
    /// The store update is conditional on the log still being pending, so of
    /// two concurrent resolutions only one wins.
    #[instrument(skip(self, request))]
    pub async fn resolve(
        &self,
        actor: Actor,
        log_id: Uuid,
        request: ResolveClinicalLogRequest,
    ) -> ServiceResult<ClinicalLogResponse> {
        request.validate()?;
        let decision = parse_status("status", &request.status)?;
        if !decision.is_terminal() {
            return Err(DomainError::InvalidDecision(decision).into());
        }

        let log = self.get_log_entity(log_id).await?;
        if log.supervisor_id != actor.user_id && !actor.is_admin() {
            return Err(DomainError::NotLogSupervisor.into());
        }
        log.check_resolution(decision)?;

        match self
            .ctx
            .clinical_log_repo()
            .update_status_if_pending(log_id, decision)
            .await?
        {
            StatusUpdate::Updated(updated) => {
                info!(log_id = %log_id, status = %decision, "Clinical log resolved");
                Ok(ClinicalLogResponse::from(&updated))
            }
            StatusUpdate::NotFound => Err(DomainError::ClinicalLogNotFound(log_id).into()),
            StatusUpdate::AlreadyResolved(current) => {
                warn!(log_id = %log_id, current = %current, "Lost resolution race");
                Err(DomainError::LogAlreadyResolved(current).into())
            }
        }
    }

    /// Withdraw a log while it is still pending
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, log_id: Uuid) -> ServiceResult<()> {
        let log = self.get_log_entity(log_id).await?;
        if !actor.is_self_or_admin(log.user_id) {
            return Err(DomainError::NotLogOwner.into());
        }
        log.check_deletable()?;

        match self.ctx.clinical_log_repo().delete_if_pending(log_id).await? {
            DeleteOutcome::Deleted => {
                info!(log_id = %log_id, "Clinical log deleted");
                Ok(())
            }
            DeleteOutcome::NotFound => Err(DomainError::ClinicalLogNotFound(log_id).into()),
            DeleteOutcome::NotPending(current) => Err(DomainError::LogNotPending(current).into()),
        }
    }

    /// Logs owned by the actor
    #[instrument(skip(self, query))]
    pub async fn list_own(
        &self,
        actor: Actor,
        query: ClinicalLogQuery,
    ) -> ServiceResult<Vec<ClinicalLogResponse>> {
        let filter = Self::apply_query(ClinicalLogFilter::for_user(actor.user_id), &query)?;
        self.list(filter).await
    }

    /// Review queue: logs naming the actor as supervisor
    #[instrument(skip(self, query))]
    pub async fn list_for_supervisor(
        &self,
        actor: Actor,
        query: ClinicalLogQuery,
    ) -> ServiceResult<Vec<ClinicalLogResponse>> {
        let filter = Self::apply_query(ClinicalLogFilter::for_supervisor(actor.user_id), &query)?;
        self.list(filter).await
    }

    /// Get one log; visible to its owner, its supervisor and admins
    #[instrument(skip(self))]
    pub async fn get(&self, actor: Actor, log_id: Uuid) -> ServiceResult<ClinicalLogResponse> {
        let log = self.get_log_entity(log_id).await?;
        if !actor.is_self_or_admin(log.user_id) && log.supervisor_id != actor.user_id {
            // Hide existence from unrelated accounts
            return Err(DomainError::ClinicalLogNotFound(log_id).into());
        }
        Ok(ClinicalLogResponse::from(&log))
    }

    /// Get log entity by ID
    #[instrument(skip(self))]
    pub async fn get_log_entity(&self, log_id: Uuid) -> ServiceResult<ClinicalLog> {
        self.ctx
            .clinical_log_repo()
            .find_by_id(log_id)
            .await?
            .ok_or_else(|| DomainError::ClinicalLogNotFound(log_id).into())
    }

    async fn list(&self, filter: ClinicalLogFilter) -> ServiceResult<Vec<ClinicalLogResponse>> {
        let logs = self.ctx.clinical_log_repo().list(filter).await?;
        Ok(logs.iter().map(ClinicalLogResponse::from).collect())
    }

    fn apply_query(
        filter: ClinicalLogFilter,
        query: &ClinicalLogQuery,
    ) -> ServiceResult<ClinicalLogFilter> {
        Ok(filter
            .with_week(parse_optional_week("week", query.week.as_deref())?)
            .with_status(parse_optional_status("status", query.status.as_deref())?))
    }

    /// Dispatch the submission notice on a background task.
    ///
    /// The caller never waits on the mail API; failures and timeouts are only
    /// logged.
    fn notify_supervisor(&self, supervisor: &UserProfile, log: &ClinicalLog) {
        let notice = SubmissionNotice::for_clinical_log(supervisor.email.clone(), log);
        let notifier = Arc::clone(self.ctx.notifier());
        let timeout = self.ctx.notify_timeout();
        let log_id = log.id;

        tokio::spawn(
            async move {
                match tokio::time::timeout(timeout, notifier.send_submission_notice(&notice)).await
                {
                    Ok(Ok(())) => debug!(log_id = %log_id, "Submission notice sent"),
                    Ok(Err(e)) => {
                        warn!(log_id = %log_id, error = %e, "Submission notice failed");
                    }
                    Err(_) => {
                        warn!(
                            log_id = %log_id,
                            timeout_ms = timeout.as_millis() as u64,
                            "Submission notice timed out"
                        );
                    }
                }
            }
            .in_current_span(),
        );
    }
}
