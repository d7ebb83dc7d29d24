//! The Message Service — validates and stores messages and notifies the
//! receiver.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use grantflow_core::error::AppError;
use grantflow_core::types::{ApplicationId, DocumentId, MessageId, UserId};
use grantflow_entity::message::Message;
use grantflow_entity::notification::NotificationKind;
use grantflow_store::{ApplicationStore, MessageStore};

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

/// Stores messages in application threads and triggers the receiver
/// notification.
#[derive(Clone)]
pub struct MessageService {
    /// Message store.
    messages: Arc<dyn MessageStore>,
    /// Application store, for validating the thread reference.
    applications: Arc<dyn ApplicationStore>,
    /// Dispatcher for the receiver notification.
    dispatcher: NotificationDispatcher,
}

impl MessageService {
    /// Creates a new message service.
    pub fn new(
        messages: Arc<dyn MessageStore>,
        applications: Arc<dyn ApplicationStore>,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            messages,
            applications,
            dispatcher,
        }
    }

    /// Sends a message from the current user into an application thread.
    ///
    /// Stores the message unread and invokes the dispatcher once with
    /// `NEW_MESSAGE` addressed to the receiver. Fails with a validation
    /// error if the content is empty, the sender addresses themselves, or
    /// the application thread is unknown.
    pub async fn send(
        &self,
        ctx: &RequestContext,
        application_id: ApplicationId,
        receiver_id: UserId,
        content: String,
        attachments: Vec<DocumentId>,
    ) -> Result<Message, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Message content must not be empty"));
        }
        if receiver_id.is_nil() {
            return Err(AppError::validation("Receiver must be present"));
        }
        if receiver_id == ctx.user_id {
            return Err(AppError::validation("Sender and receiver must differ"));
        }
        if self
            .applications
            .find_by_id(application_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation(format!(
                "Application {application_id} does not exist"
            )));
        }

        let message = Message {
            id: MessageId::new(),
            application_id,
            sender_id: ctx.user_id,
            receiver_id,
            content,
            attachments,
            read_at: None,
            created_at: Utc::now(),
        };

        let message = self.messages.create(message).await?;

        self.dispatcher
            .notify(
                receiver_id,
                NotificationKind::NewMessage,
                "New message",
                "You received a new message on one of your applications",
                serde_json::json!({
                    "application_id": application_id,
                    "message_id": message.id,
                }),
            )
            .await?;

        info!(
            user_id = %ctx.user_id,
            application_id = %application_id,
            message_id = %message.id,
            "Message sent"
        );

        Ok(message)
    }

    /// Marks a message as read. No-op if already read; `NotFound` if the
    /// id is unknown.
    pub async fn mark_read(&self, message_id: MessageId) -> Result<Message, AppError> {
        let mut message = self
            .messages
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Message {message_id} does not exist")))?;

        if message.read_at.is_some() {
            return Ok(message);
        }

        message.read_at = Some(Utc::now());
        self.messages.update(message.clone()).await?;
        Ok(message)
    }
}
