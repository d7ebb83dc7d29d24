//! The Conversation Aggregator — derives per-application conversation
//! summaries from the message log.

use std::collections::HashMap;
use std::sync::Arc;

use grantflow_core::error::AppError;
use grantflow_core::types::ApplicationId;
use grantflow_entity::conversation::ConversationSummary;
use grantflow_store::MessageStore;

use crate::context::RequestContext;

/// Read-only view over the message store. Conversations are not stored;
/// each listing is computed from the messages the user participates in.
#[derive(Clone)]
pub struct ConversationService {
    /// Message store.
    messages: Arc<dyn MessageStore>,
}

impl ConversationService {
    /// Creates a new conversation service.
    pub fn new(messages: Arc<dyn MessageStore>) -> Self {
        Self { messages }
    }

    /// Lists the current user's conversations, one per application thread
    /// the user has exchanged messages in, ordered by the most recent
    /// message first.
    ///
    /// For each thread the summary carries the latest message, the count
    /// of messages still unread by the current user, and the set of
    /// participants seen in the thread. A later-stored message wins a
    /// `created_at` tie.
    pub async fn list_conversations(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let messages = self.messages.find_by_participant(ctx.user_id).await?;

        let mut threads: HashMap<ApplicationId, ConversationSummary> = HashMap::new();

        for message in messages {
            let unread = message.receiver_id == ctx.user_id && message.is_unread();

            match threads.entry(message.application_id) {
                std::collections::hash_map::Entry::Occupied(mut entry) => {
                    let summary = entry.get_mut();
                    summary.participants.insert(message.sender_id);
                    summary.participants.insert(message.receiver_id);
                    if unread {
                        summary.unread_count += 1;
                    }
                    // Messages arrive in storage order, so `>=` lets the
                    // later-stored message win an equal timestamp.
                    if message.created_at >= summary.last_message.created_at {
                        summary.last_message = message;
                    }
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    let mut summary = ConversationSummary {
                        application_id: message.application_id,
                        unread_count: u64::from(unread),
                        participants: [message.sender_id, message.receiver_id].into(),
                        last_message: message,
                    };
                    summary.participants.insert(ctx.user_id);
                    entry.insert(summary);
                }
            }
        }

        let mut summaries: Vec<ConversationSummary> = threads.into_values().collect();
        summaries.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));
        Ok(summaries)
    }
}
