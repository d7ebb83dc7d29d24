//! Message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grantflow_core::types::{ApplicationId, DocumentId, MessageId, UserId};

/// A message exchanged between the two counterparties of an application.
///
/// Invariants: `sender_id != receiver_id`; every message belongs to exactly
/// one application thread; `read_at` transitions from null to a timestamp
/// exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: MessageId,
    /// The application thread this message belongs to.
    pub application_id: ApplicationId,
    /// The sending user.
    pub sender_id: UserId,
    /// The receiving user.
    pub receiver_id: UserId,
    /// Message text. Never empty.
    pub content: String,
    /// Ordered list of attached document references.
    pub attachments: Vec<DocumentId>,
    /// When the receiver read the message.
    pub read_at: Option<DateTime<Utc>>,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Check if the message has not been read yet.
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}
