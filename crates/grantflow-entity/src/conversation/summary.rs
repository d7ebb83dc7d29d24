//! Conversation summary value object.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use grantflow_core::types::{ApplicationId, UserId};

use crate::message::Message;

/// Derived, request-scoped summary of a per-application message thread.
///
/// Computed on demand from the current message set for a given user; it has
/// no independent identity and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// The application thread being summarized.
    pub application_id: ApplicationId,
    /// The most recent message in the thread.
    pub last_message: Message,
    /// Count of messages addressed to the requesting user and not yet read.
    pub unread_count: u64,
    /// Distinct user ids appearing as sender or receiver in the thread.
    pub participants: BTreeSet<UserId>,
}
