//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grantflow_core::types::{NotificationId, UserId};

use super::kind::NotificationKind;

/// A notification delivered to a user.
///
/// Immutable once created, except for `read_at`, which transitions from
/// null to a timestamp exactly once (individually or via mark-all-read).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Notification title.
    pub title: String,
    /// Rendered body text.
    pub body: String,
    /// Structured payload referencing the triggering entity.
    pub payload: serde_json::Value,
    /// When the user read this notification.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}
