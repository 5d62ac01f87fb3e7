//! API Integration Tests
//!
//! Each test starts the full axum application on the in-memory record store
//! and drives it over HTTP with tokens signed by the test secret.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use hours_core::Role;
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer, TestUser,
};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

/// Submit a log as `user` and optionally resolve it as `supervisor`
async fn submit(
    server: &TestServer,
    user: &TestUser,
    supervisor: &TestUser,
    week: &str,
    direct: &str,
    indirect: &str,
    decision: Option<ResolveRequest>,
) -> ClinicalLogView {
    let response = server
        .post_auth(
            "/api/v1/clinical-logs",
            &user.token,
            &SubmitLogRequest::new(week, direct, indirect, supervisor.id),
        )
        .await
        .unwrap();
    let log: ClinicalLogView = assert_json(response, StatusCode::CREATED).await.unwrap();

    match decision {
        Some(decision) => {
            let response = server
                .patch_auth(
                    &format!("/api/v1/clinical-logs/{}/status", log.id),
                    &supervisor.token,
                    &decision,
                )
                .await
                .unwrap();
            assert_json(response, StatusCode::OK).await.unwrap()
        }
        None => log,
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["record_store"], "healthy");
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/profiles/@me").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_foreign_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let foreign = hours_common::JwtService::new("some-other-secret", 900)
        .issue_access_token(Uuid::new_v4(), None)
        .unwrap();

    let response = server.get_auth("/api/v1/profiles/@me", &foreign).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_self_provisioning() {
    let server = TestServer::start().await.unwrap();
    let account = server.account().unwrap();

    // No profile yet
    let response = server.get_auth("/api/v1/profiles/@me", &account.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_auth("/api/v1/profiles", &account.token, &ProvisionRequest::own("supervisor"))
        .await
        .unwrap();
    let created: ProfileView = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.id, account.id.to_string());
    assert_eq!(created.role, "supervisor");

    let response = server.get_auth("/api/v1/profiles/@me", &account.token).await.unwrap();
    let me: ProfileView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.name, "Test supervisor");
}

#[tokio::test]
async fn test_supervisor_provisioning_links_supervisee() {
    let server = TestServer::start().await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();
    let new_id = Uuid::new_v4();

    let response = server
        .post_auth(
            "/api/v1/profiles",
            &supervisor.token,
            &ProvisionRequest::other(new_id, "user"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/supervisors/@me/supervisees", &supervisor.token)
        .await
        .unwrap();
    let supervisees: Vec<ProfileView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(supervisees.len(), 1);
    assert_eq!(supervisees[0].id, new_id.to_string());
}

#[tokio::test]
async fn test_role_change_is_admin_only() {
    let server = TestServer::start().await.unwrap();
    let admin = server.seed_user(Role::Admin).await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let body = json!({ "role": "supervisor" });

    let response = server
        .patch_auth(&format!("/api/v1/profiles/{}/role", user.id), &user.token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&format!("/api/v1/profiles/{}/role", user.id), &admin.token, &body)
        .await
        .unwrap();
    let updated: ProfileView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.role, "supervisor");
}

// ============================================================================
// Approval Workflow Tests
// ============================================================================

#[tokio::test]
async fn test_submit_and_review_queue() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    let log = submit(&server, &user, &supervisor, "2024-W05", "5", "3.5", None).await;
    assert_eq!(log.status, "pending");
    assert_eq!(log.user_id, user.id.to_string());
    assert_eq!(log.supervisor_id, supervisor.id.to_string());
    assert_eq!(log.direct_hours, 5.0);
    assert_eq!(log.indirect_hours, 3.5);

    let response = server
        .get_auth("/api/v1/clinical-logs/review?status=pending", &supervisor.token)
        .await
        .unwrap();
    let queue: Vec<ClinicalLogView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, log.id);

    let response = server
        .get_auth("/api/v1/clinical-logs?week=2024-W05", &user.token)
        .await
        .unwrap();
    let own: Vec<ClinicalLogView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].week, "2024-W05");
}

#[tokio::test]
async fn test_submit_without_supervisor_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();

    let mut request = SubmitLogRequest::new("2024-W05", "5", "3.5", Uuid::nil());
    request.supervisor_id = None;

    let response = server
        .post_auth("/api/v1/clinical-logs", &user.token, &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    // Nothing was stored
    let response = server.get_auth("/api/v1/clinical-logs", &user.token).await.unwrap();
    let own: Vec<ClinicalLogView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(own.is_empty());
}

#[tokio::test]
async fn test_submit_rejects_bad_hours_and_week() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/clinical-logs",
            &user.token,
            &SubmitLogRequest::new("2024-W05", "abc", "1", supervisor.id),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_HOURS");

    let response = server
        .post_auth(
            "/api/v1/clinical-logs",
            &user.token,
            &SubmitLogRequest::new("2024-05", "1", "1", supervisor.id),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_WEEK");
}

#[tokio::test]
async fn test_numeric_hours_are_accepted() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    let body = json!({
        "week": "2024-W05",
        "directHours": 2.5,
        "indirectHours": 1,
        "site": "Clinic",
        "supervisorId": supervisor.id,
    });
    let response = server
        .post_auth("/api/v1/clinical-logs", &user.token, &body)
        .await
        .unwrap();
    let log: ClinicalLogView = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(log.direct_hours, 2.5);
    assert_eq!(log.indirect_hours, 1.0);
}

#[tokio::test]
async fn test_resolution_is_final() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    let log = submit(
        &server,
        &user,
        &supervisor,
        "2024-W05",
        "5",
        "3.5",
        Some(ResolveRequest::accepted()),
    )
    .await;
    assert_eq!(log.status, "accepted");

    let response = server
        .patch_auth(
            &format!("/api/v1/clinical-logs/{}/status", log.id),
            &supervisor.token,
            &ResolveRequest::declined(),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "LOG_ALREADY_RESOLVED");

    let response = server
        .get_auth(&format!("/api/v1/clinical-logs/{}", log.id), &user.token)
        .await
        .unwrap();
    let stored: ClinicalLogView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored.status, "accepted");
}

#[tokio::test]
async fn test_only_named_supervisor_resolves() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();
    let other = server.seed_user(Role::Supervisor).await.unwrap();

    let log = submit(&server, &user, &supervisor, "2024-W05", "5", "3.5", None).await;

    let response = server
        .patch_auth(
            &format!("/api/v1/clinical-logs/{}/status", log.id),
            &other.token,
            &ResolveRequest::accepted(),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_LOG_SUPERVISOR");

    // A pending decision is not a resolution
    let response = server
        .patch_auth(
            &format!("/api/v1/clinical-logs/{}/status", log.id),
            &supervisor.token,
            &json!({ "status": "pending" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_resolve_unknown_log() {
    let server = TestServer::start().await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/clinical-logs/{}/status", Uuid::new_v4()),
            &supervisor.token,
            &ResolveRequest::accepted(),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_CLINICAL_LOG");

    let response = server
        .get_auth("/api/v1/clinical-logs/not-a-uuid", &supervisor.token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_delete_only_pending() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    let accepted = submit(
        &server,
        &user,
        &supervisor,
        "2024-W05",
        "5",
        "3.5",
        Some(ResolveRequest::accepted()),
    )
    .await;
    let response = server
        .delete_auth(&format!("/api/v1/clinical-logs/{}", accepted.id), &user.token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "LOG_NOT_PENDING");

    let pending = submit(&server, &user, &supervisor, "2024-W06", "1", "1", None).await;
    let response = server
        .delete_auth(&format!("/api/v1/clinical-logs/{}", pending.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/clinical-logs/{}", pending.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Progress Tests
// ============================================================================

#[tokio::test]
async fn test_progress_defaults_without_logs_or_goals() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/progress", &user.token)
        .await
        .unwrap();
    let progress: ProgressView = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(progress.week.is_none());
    assert_eq!(progress.total_clinical, 0.0);
    assert_eq!(progress.total_supervision, 0.0);
    assert_eq!(progress.clinical_goal, 4000.0);
    assert_eq!(progress.supervision_goal, 100.0);
    assert_eq!(progress.clinical_remaining, 4000.0);
    assert_eq!(progress.supervision_remaining, 100.0);
}

#[tokio::test]
async fn test_progress_counts_accepted_logs_only() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    submit(&server, &user, &supervisor, "2024-W05", "5", "3.5", Some(ResolveRequest::accepted())).await;
    submit(&server, &user, &supervisor, "2024-W06", "2", "1.5", Some(ResolveRequest::accepted())).await;
    submit(&server, &user, &supervisor, "2024-W06", "9", "9", Some(ResolveRequest::declined())).await;
    submit(&server, &user, &supervisor, "2024-W07", "4", "4", None).await;

    let response = server
        .get_auth(&format!("/api/v1/users/{}/progress", user.id), &user.token)
        .await
        .unwrap();
    let progress: ProgressView = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(progress.total_direct, 7.0);
    assert_eq!(progress.total_indirect, 5.0);
    assert_eq!(progress.total_clinical, 12.0);
    assert_eq!(progress.clinical_remaining, 3988.0);
}

#[tokio::test]
async fn test_week_goal_and_signed_breakdown() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    submit(&server, &user, &supervisor, "2024-W06", "8", "4", Some(ResolveRequest::accepted())).await;

    let response = server
        .put_auth(
            "/api/v1/users/@me/goals/2024-W06",
            &user.token,
            &json!({ "clinicalHoursTarget": "10", "supervisionHoursTarget": 1 }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Overview clamps at zero
    let response = server
        .get_auth("/api/v1/users/@me/progress?week=2024-W06", &user.token)
        .await
        .unwrap();
    let progress: ProgressView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(progress.week.as_deref(), Some("2024-W06"));
    assert_eq!(progress.clinical_goal, 10.0);
    assert_eq!(progress.clinical_remaining, 0.0);

    // Breakdown keeps the sign
    let response = server
        .get_auth("/api/v1/users/@me/progress/weekly", &user.token)
        .await
        .unwrap();
    let breakdown: BreakdownView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(breakdown.weeks.len(), 1);
    assert_eq!(breakdown.weeks[0].week, "2024-W06");
    assert_eq!(breakdown.weeks[0].clinical_hours, 12.0);
    assert_eq!(breakdown.weeks[0].clinical_remaining, -2.0);
}

#[tokio::test]
async fn test_progress_access_control() {
    let server = TestServer::start().await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();
    let peer = server.seed_user(Role::User).await.unwrap();
    let user_id = Uuid::new_v4();

    // Supervisor provisions the user and so supervises them
    let response = server
        .post_auth(
            "/api/v1/profiles",
            &supervisor.token,
            &ProvisionRequest::other(user_id, "user"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/users/{user_id}/progress");
    let response = server.get_auth(&path, &supervisor.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&path, &peer.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Goal Tests
// ============================================================================

#[tokio::test]
async fn test_goal_create_conflict_and_update() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let body = json!({
        "week": "global",
        "clinicalHoursTarget": "3000",
        "supervisionHoursTarget": "80",
    });

    let response = server.post_auth("/api/v1/goals", &user.token, &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth("/api/v1/goals", &user.token, &body).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "GOAL_ALREADY_EXISTS");

    let response = server
        .patch_auth(
            "/api/v1/users/@me/goals",
            &user.token,
            &json!({
                "week": "global",
                "clinicalHoursTarget": "3500",
                "supervisionHoursTarget": "90",
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/progress", &user.token)
        .await
        .unwrap();
    let progress: ProgressView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(progress.clinical_goal, 3500.0);
    assert_eq!(progress.supervision_goal, 90.0);
}

// ============================================================================
// Supervision Log Tests
// ============================================================================

#[tokio::test]
async fn test_supervision_logs_count_immediately() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/supervision-logs",
            &user.token,
            &json!({ "week": "2024-W05", "supervisionHours": "1.5" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/supervision-logs?week=2024-W05", &user.token)
        .await
        .unwrap();
    let logs: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logs.len(), 1);

    let response = server
        .get_auth("/api/v1/users/@me/progress", &user.token)
        .await
        .unwrap();
    let progress: ProgressView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(progress.total_supervision, 1.5);
    assert_eq!(progress.supervision_remaining, 98.5);
}

// ============================================================================
// Export Tests
// ============================================================================

#[tokio::test]
async fn test_export_workbook_and_csv() {
    let server = TestServer::start().await.unwrap();
    let user = server.seed_user(Role::User).await.unwrap();
    let supervisor = server.seed_user(Role::Supervisor).await.unwrap();

    submit(&server, &user, &supervisor, "2024-W05", "5", "3.5", Some(ResolveRequest::accepted())).await;
    submit(&server, &user, &supervisor, "2024-W05", "9", "9", None).await;

    let response = server
        .get_auth("/api/v1/users/@me/export", &user.token)
        .await
        .unwrap();
    let workbook: WorkbookView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(workbook.sheets.len(), 2);
    assert_eq!(workbook.sheets[0].title, "Clinical Logs");
    assert_eq!(workbook.sheets[0].slug, "clinical-logs");
    assert_eq!(workbook.sheets[0].rows.len(), 1);
    assert_eq!(
        workbook.sheets[0].headers,
        vec!["directHours", "indirectHours", "site", "supervisor", "status"]
    );
    assert_eq!(workbook.sheets[1].slug, "supervision-logs");

    let response = server
        .get_auth("/api/v1/users/@me/export/clinical-logs.csv", &user.token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/csv; charset=utf-8"
    );
    let csv = response.text().await.unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("directHours,indirectHours,site,supervisor,status"));
    assert!(lines.next().unwrap().starts_with("5,3.5,Community Clinic,"));
    assert!(lines.next().is_none());

    let response = server
        .get_auth("/api/v1/users/@me/export/invoices.csv", &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
