//! End-to-end tests for the application lifecycle endpoints.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

async fn create_application(app: &TestApp, company: Uuid, program_id: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/applications",
            Some(json!({
                "program_id": program_id,
                "answers": { "company_name": "Acme GmbH" },
            })),
            Some(company),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.data()["id"]
        .as_str()
        .expect("application id")
        .to_string()
}

#[tokio::test]
async fn test_full_lifecycle_draft_to_approved() {
    let app = TestApp::new();
    let company = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let program_id = app.create_program(owner, "Green Energy Fund").await;

    let id = create_application(&app, company, &program_id.to_string()).await;

    for status in ["SUBMITTED", "UNDER_REVIEW", "APPROVED"] {
        let response = app
            .request(
                "PUT",
                &format!("/api/applications/{id}/status"),
                Some(json!({ "status": status })),
                Some(company),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        assert_eq!(response.data()["status"], status);
    }

    let response = app
        .request("GET", &format!("/api/applications/{id}"), None, Some(company))
        .await;
    assert_eq!(response.data()["status"], "APPROVED");
    assert!(!response.data()["submitted_at"].is_null());
}

#[tokio::test]
async fn test_submission_notifies_both_parties_once() {
    let app = TestApp::new();
    let company = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let program_id = app.create_program(owner, "Rural Broadband Fund").await;

    let id = create_application(&app, company, &program_id.to_string()).await;

    let submit = json!({ "status": "SUBMITTED" });
    let response = app
        .request(
            "PUT",
            &format!("/api/applications/{id}/status"),
            Some(submit.clone()),
            Some(company),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // A second submit of an already-submitted application is a plain
    // update and must not duplicate the notification pair.
    let response = app
        .request(
            "PUT",
            &format!("/api/applications/{id}/status"),
            Some(submit),
            Some(company),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for user in [company, owner] {
        let response = app
            .request("GET", "/api/notifications/unread-count", None, Some(user))
            .await;
        assert_eq!(response.data()["count"], 1);
    }

    let response = app
        .request("GET", "/api/notifications", None, Some(owner))
        .await;
    let items = response.data()["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "NEW_APPLICATION");
    assert_eq!(items[0]["payload"]["application_id"], id);
}

#[tokio::test]
async fn test_invalid_transition_is_conflict() {
    let app = TestApp::new();
    let company = Uuid::new_v4();
    let program_id = app.create_program(Uuid::new_v4(), "Pilot Program").await;

    let id = create_application(&app, company, &program_id.to_string()).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/applications/{id}/status"),
            Some(json!({ "status": "APPROVED" })),
            Some(company),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "INVALID_TRANSITION");

    // The record is left untouched.
    let response = app
        .request("GET", &format!("/api/applications/{id}"), None, Some(company))
        .await;
    assert_eq!(response.data()["status"], "DRAFT");
}

#[tokio::test]
async fn test_same_status_update_patches_answers() {
    let app = TestApp::new();
    let company = Uuid::new_v4();
    let program_id = app.create_program(Uuid::new_v4(), "Pilot Program").await;

    let id = create_application(&app, company, &program_id.to_string()).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/applications/{id}/status"),
            Some(json!({ "status": "DRAFT", "answers": { "budget": 50_000 } })),
            Some(company),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["answers"]["budget"], 50_000);
    assert_eq!(response.data()["answers"]["company_name"], "Acme GmbH");

    // No notifications were emitted for a plain field update.
    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(company))
        .await;
    assert_eq!(response.data()["count"], 0);
}

#[tokio::test]
async fn test_unknown_program_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/applications",
            Some(json!({ "program_id": Uuid::new_v4() })),
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_application_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request(
            "GET",
            &format!("/api/applications/{}", Uuid::new_v4()),
            None,
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_identity_is_unauthorized() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/applications", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_needs_no_identity() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
}
