//! End-to-end tests for the message endpoints.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

async fn seed_application(app: &TestApp, company: Uuid) -> String {
    let program_id = app.create_program(Uuid::new_v4(), "Pilot Program").await;
    let response = app
        .request(
            "POST",
            "/api/applications",
            Some(json!({ "program_id": program_id })),
            Some(company),
        )
        .await;
    response.data()["id"]
        .as_str()
        .expect("application id")
        .to_string()
}

#[tokio::test]
async fn test_send_message_notifies_receiver() {
    let app = TestApp::new();
    let sender = Uuid::new_v4();
    let receiver = Uuid::new_v4();
    let application_id = seed_application(&app, sender).await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({
                "application_id": application_id,
                "receiver_id": receiver,
                "content": "Could you clarify the budget line?",
            })),
            Some(sender),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response.data()["read_at"].is_null());

    let response = app
        .request("GET", "/api/notifications", None, Some(receiver))
        .await;
    let items = response.data()["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "NEW_MESSAGE");
    assert_eq!(items[0]["payload"]["application_id"], application_id);
}

#[tokio::test]
async fn test_empty_content_is_bad_request() {
    let app = TestApp::new();
    let sender = Uuid::new_v4();
    let receiver = Uuid::new_v4();
    let application_id = seed_application(&app, sender).await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({
                "application_id": application_id,
                "receiver_id": receiver,
                "content": "   ",
            })),
            Some(sender),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    // Nothing was dispatched.
    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(receiver))
        .await;
    assert_eq!(response.data()["count"], 0);
}

#[tokio::test]
async fn test_message_to_unknown_application_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({
                "application_id": Uuid::new_v4(),
                "receiver_id": Uuid::new_v4(),
                "content": "hello",
            })),
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mark_message_read() {
    let app = TestApp::new();
    let sender = Uuid::new_v4();
    let receiver = Uuid::new_v4();
    let application_id = seed_application(&app, sender).await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({
                "application_id": application_id,
                "receiver_id": receiver,
                "content": "please read",
            })),
            Some(sender),
        )
        .await;
    let message_id = response.data()["id"].as_str().expect("message id").to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/messages/{message_id}/read"),
            None,
            Some(receiver),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.data()["read_at"].is_null());
}

#[tokio::test]
async fn test_mark_unknown_message_read_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request(
            "PUT",
            &format!("/api/messages/{}/read", Uuid::new_v4()),
            None,
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
