//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use grantflow_entity::application::ApplicationStatus;
use grantflow_entity::notification::NotificationKind;

/// Body for `POST /api/applications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    /// Program the company applies to.
    pub program_id: Uuid,
    /// Initial form answers.
    #[serde(default = "default_answers")]
    pub answers: serde_json::Value,
}

/// Body for `PUT /api/applications/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// Requested status. Equal to the current status means a plain field
    /// update.
    pub status: ApplicationStatus,
    /// Optional partial update of the form answers.
    #[serde(default)]
    pub answers: Option<serde_json::Value>,
}

/// Body for `POST /api/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Application thread the message belongs to.
    pub application_id: Uuid,
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Message text.
    pub content: String,
    /// Document attachments.
    #[serde(default)]
    pub attachments: Vec<Uuid>,
}

/// Body for `POST /api/notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotificationRequest {
    /// Recipient.
    pub user_id: Uuid,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Longer body text.
    pub body: String,
    /// Structured payload for client-side routing.
    #[serde(default = "default_payload")]
    pub payload: serde_json::Value,
}

fn default_answers() -> serde_json::Value {
    serde_json::json!({})
}

fn default_payload() -> serde_json::Value {
    serde_json::json!({})
}
