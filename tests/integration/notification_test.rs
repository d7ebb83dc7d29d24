//! End-to-end tests for the notification endpoints.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

async fn create_notification(app: &TestApp, user: Uuid, title: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({
                "user_id": user,
                "kind": "APPLICATION_STATUS",
                "title": title,
                "body": "Your application moved forward",
            })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.data()["id"].as_str().expect("id").to_string()
}

#[tokio::test]
async fn test_create_and_list_newest_first() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    create_notification(&app, user, "first").await;
    create_notification(&app, user, "second").await;

    let response = app
        .request("GET", "/api/notifications", None, Some(user))
        .await;
    let items = response.data()["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "second");
    assert_eq!(items[1]["title"], "first");
    assert_eq!(response.data()["total_items"], 2);
}

#[tokio::test]
async fn test_pagination_caps_page_size() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    for i in 0..3 {
        create_notification(&app, user, &format!("n{i}")).await;
    }

    let response = app
        .request(
            "GET",
            "/api/notifications?page=2&per_page=2",
            None,
            Some(user),
        )
        .await;
    let items = response.data()["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(response.data()["total_pages"], 2);
}

#[tokio::test]
async fn test_mark_read_and_unread_count() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let id = create_notification(&app, user, "unread").await;

    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(user))
        .await;
    assert_eq!(response.data()["count"], 1);

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{id}/read"),
            None,
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(user))
        .await;
    assert_eq!(response.data()["count"], 0);
}

#[tokio::test]
async fn test_mark_unknown_notification_read_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/read", Uuid::new_v4()),
            None,
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_read_all_is_idempotent() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    for i in 0..3 {
        create_notification(&app, user, &format!("n{i}")).await;
    }

    let response = app
        .request("PUT", "/api/notifications/read-all", None, Some(user))
        .await;
    assert_eq!(response.data()["marked"], 3);

    let response = app
        .request("PUT", "/api/notifications/read-all", None, Some(user))
        .await;
    assert_eq!(response.data()["marked"], 0);
}

#[tokio::test]
async fn test_nil_recipient_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({
                "user_id": Uuid::nil(),
                "kind": "NEW_MESSAGE",
                "title": "t",
                "body": "b",
            })),
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_users_only_see_their_own() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();

    create_notification(&app, user, "mine").await;

    let response = app
        .request("GET", "/api/notifications", None, Some(other))
        .await;
    let items = response.data()["items"].as_array().expect("items");
    assert!(items.is_empty());
}
