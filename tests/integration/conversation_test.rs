//! End-to-end tests for the conversation listing.

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

async fn send(app: &TestApp, from: Uuid, to: Uuid, application_id: &str, content: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(json!({
                "application_id": application_id,
                "receiver_id": to,
                "content": content,
            })),
            Some(from),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.data()["id"].as_str().expect("message id").to_string()
}

#[tokio::test]
async fn test_one_summary_per_application_thread() {
    let app = TestApp::new();
    let company = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let app_one = seed_application(&app, company).await;
    let app_two = seed_application(&app, company).await;

    // Thread one gets two messages, thread two gets one.
    send(&app, owner, company, &app_one, "A").await;
    let b = send(&app, company, owner, &app_one, "B").await;
    let c = send(&app, owner, company, &app_two, "C").await;

    let response = app
        .request("GET", "/api/conversations", None, Some(company))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let conversations = response.data().as_array().expect("array");
    assert_eq!(conversations.len(), 2);

    // Thread two holds the newest message, so it sorts first.
    assert_eq!(conversations[0]["application_id"], app_two);
    assert_eq!(conversations[0]["last_message"]["id"], c);
    assert_eq!(conversations[0]["unread_count"], 1);

    // In thread one the company's own outbound message B is the latest;
    // only inbound unread A counts.
    assert_eq!(conversations[1]["application_id"], app_one);
    assert_eq!(conversations[1]["last_message"]["id"], b);
    assert_eq!(conversations[1]["unread_count"], 1);

    let participants = conversations[1]["participants"].as_array().expect("set");
    assert_eq!(participants.len(), 2);
}

#[tokio::test]
async fn test_reading_a_message_drops_the_unread_count() {
    let app = TestApp::new();
    let company = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let application_id = seed_application(&app, company).await;

    let message_id = send(&app, owner, company, &application_id, "ping").await;

    app.request(
        "PUT",
        &format!("/api/messages/{message_id}/read"),
        None,
        Some(company),
    )
    .await;

    let response = app
        .request("GET", "/api/conversations", None, Some(company))
        .await;
    let conversations = response.data().as_array().expect("array");
    assert_eq!(conversations[0]["unread_count"], 0);
}

#[tokio::test]
async fn test_counterparty_sees_the_same_thread() {
    let app = TestApp::new();
    let company = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let application_id = seed_application(&app, company).await;

    send(&app, company, owner, &application_id, "hello").await;

    // The receiver sees the thread with one unread message.
    let response = app
        .request("GET", "/api/conversations", None, Some(owner))
        .await;
    let conversations = response.data().as_array().expect("array");
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0]["unread_count"], 1);

    // A stranger sees nothing.
    let response = app
        .request("GET", "/api/conversations", None, Some(Uuid::new_v4()))
        .await;
    assert!(response.data().as_array().expect("array").is_empty());
}
