//! Export service
//!
//! Builds the two-sheet workbook of a user's accepted clinical logs and their
//! supervision logs, as JSON or as one CSV per sheet.

use std::collections::{BTreeSet, HashMap};

use hours_core::traits::{ClinicalLogFilter, SupervisionLogFilter};
use hours_core::{build_workbook, Actor, ExportError, LogStatus, SheetKind, Workbook};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CsvExport, WorkbookFor, WorkbookResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Export service
pub struct ExportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExportService<'a> {
    /// Create a new ExportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whole workbook as JSON
    #[instrument(skip(self))]
    pub async fn workbook(&self, actor: Actor, user_id: Uuid) -> ServiceResult<WorkbookResponse> {
        let workbook = self.build(actor, user_id).await?;
        Ok(WorkbookResponse::from(WorkbookFor {
            user_id,
            workbook: &workbook,
        }))
    }

    /// One sheet rendered as CSV; `slug` is `clinical-logs` or `supervision-logs`
    #[instrument(skip(self))]
    pub async fn sheet_csv(
        &self,
        actor: Actor,
        user_id: Uuid,
        slug: &str,
    ) -> ServiceResult<CsvExport> {
        let kind = SheetKind::from_slug(slug).map_err(export_error)?;
        let workbook = self.build(actor, user_id).await?;
        let sheet = workbook
            .sheet(kind)
            .ok_or_else(|| ServiceError::not_found("Sheet", slug))?;

        let content = sheet.to_csv().map_err(export_error)?;
        info!(user_id = %user_id, sheet = kind.slug(), rows = sheet.rows.len(), "Sheet exported");

        Ok(CsvExport {
            file_name: format!("{}-{user_id}.csv", kind.slug()),
            content,
        })
    }

    async fn build(&self, actor: Actor, user_id: Uuid) -> ServiceResult<Workbook> {
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

        let supervisor_ids: BTreeSet<Uuid> = clinical.iter().map(|log| log.supervisor_id).collect();
        let mut names = HashMap::with_capacity(supervisor_ids.len());
        for id in supervisor_ids {
            if let Some(profile) = self.ctx.profile_repo().find_by_id(id).await? {
                names.insert(id, profile.display_name().to_string());
            }
        }

        Ok(build_workbook(user_id, &clinical, &supervision, &names))
    }
}

fn export_error(err: ExportError) -> ServiceError {
    match err {
        ExportError::UnknownSheet(slug) => ServiceError::not_found("Sheet", slug),
        other => ServiceError::internal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{CreateSupervisionLogRequest, ResolveClinicalLogRequest, SubmitClinicalLogRequest};
    use crate::services::testing::{context, seed_profile};
    use crate::services::{ClinicalLogService, SupervisionLogService};
    use hours_core::Role;

    async fn seed_logs(ctx: &ServiceContext, user: Actor, supervisor: Actor) {
        let logs = ClinicalLogService::new(ctx);
        for (site, decision) in [("Accepted Site", Some("accepted")), ("Pending Site", None)] {
            let log = logs
                .submit(
                    user,
                    SubmitClinicalLogRequest {
                        week: Some("2024-W05".to_string()),
                        direct_hours: Some("5".to_string()),
                        indirect_hours: Some("3.5".to_string()),
                        site: Some(site.to_string()),
                        supervisor_id: Some(supervisor.user_id.to_string()),
                    },
                )
                .await
                .unwrap();
            if let Some(status) = decision {
                logs.resolve(
                    supervisor,
                    log.id.parse().unwrap(),
                    ResolveClinicalLogRequest {
                        status: status.to_string(),
                    },
                )
                .await
                .unwrap();
            }
        }

        SupervisionLogService::new(ctx)
            .create(
                user,
                CreateSupervisionLogRequest {
                    week: Some("2024-W05".to_string()),
                    supervision_hours: Some("1.5".to_string()),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_workbook_exports_accepted_logs_only() {
        let (ctx, _) = context();
        let user = seed_profile(&ctx, Role::User).await;
        let supervisor = seed_profile(&ctx, Role::Supervisor).await;
        seed_logs(&ctx, user, supervisor).await;

        let workbook = ExportService::new(&ctx)
            .workbook(user, user.user_id)
            .await
            .unwrap();

        assert_eq!(workbook.sheets.len(), 2);
        let clinical = &workbook.sheets[0];
        assert_eq!(clinical.title, "Clinical Logs");
        assert_eq!(clinical.rows.len(), 1);
        assert_eq!(clinical.rows[0][2], "Accepted Site");
        // Supervisor column carries the profile name
        assert_eq!(clinical.rows[0][3], format!("supervisor {}", supervisor.user_id));

        let supervision = &workbook.sheets[1];
        assert_eq!(supervision.headers, vec!["supervisionHours"]);
        assert_eq!(supervision.rows, vec![vec!["1.5".to_string()]]);
    }

    #[tokio::test]
    async fn test_sheet_csv() {
        let (ctx, _) = context();
        let user = seed_profile(&ctx, Role::User).await;
        let supervisor = seed_profile(&ctx, Role::Supervisor).await;
        seed_logs(&ctx, user, supervisor).await;
        let service = ExportService::new(&ctx);

        let csv = service
            .sheet_csv(user, user.user_id, "clinical-logs")
            .await
            .unwrap();
        let mut lines = csv.content.lines();
        assert_eq!(
            lines.next(),
            Some("directHours,indirectHours,site,supervisor,status")
        );
        assert!(lines.next().unwrap().starts_with("5,3.5,Accepted Site,"));
        assert!(lines.next().is_none());
        assert!(csv.file_name.starts_with("clinical-logs-"));

        let err = service
            .sheet_csv(user, user.user_id, "invoices")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
