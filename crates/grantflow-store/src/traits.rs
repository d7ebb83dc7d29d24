//! Store traits for durable keyed access to the domain entities.
//!
//! Each entity has a strongly typed store trait. The store owns id
//! uniqueness under concurrent callers and preserves insertion order where
//! the aggregation logic depends on it (message tie-breaking).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use grantflow_core::result::AppResult;
use grantflow_core::types::pagination::{PageRequest, PageResponse};
use grantflow_core::types::{ApplicationId, MessageId, NotificationId, ProgramId, UserId};
use grantflow_entity::application::Application;
use grantflow_entity::message::Message;
use grantflow_entity::notification::Notification;
use grantflow_entity::program::Program;

/// Keyed storage for [`Application`] records.
#[async_trait]
pub trait ApplicationStore: Send + Sync + 'static {
    /// Persist a new application and return it.
    async fn create(&self, application: Application) -> AppResult<Application>;

    /// Find an application by its id.
    async fn find_by_id(&self, id: ApplicationId) -> AppResult<Option<Application>>;

    /// Replace an existing application. Fails with `NotFound` if the id is
    /// unknown.
    async fn update(&self, application: Application) -> AppResult<Application>;

    /// List all applications created by a company, newest first.
    async fn find_by_company(&self, company_id: UserId) -> AppResult<Vec<Application>>;
}

/// Append-mostly storage for [`Message`] records.
#[async_trait]
pub trait MessageStore: Send + Sync + 'static {
    /// Persist a new message and return it.
    async fn create(&self, message: Message) -> AppResult<Message>;

    /// Find a message by its id.
    async fn find_by_id(&self, id: MessageId) -> AppResult<Option<Message>>;

    /// Replace an existing message. Fails with `NotFound` if the id is
    /// unknown.
    async fn update(&self, message: Message) -> AppResult<Message>;

    /// Every message where the user appears as sender or receiver, in
    /// insertion order.
    async fn find_by_participant(&self, user_id: UserId) -> AppResult<Vec<Message>>;
}

/// Append-only storage for [`Notification`] records plus read-state updates.
#[async_trait]
pub trait NotificationStore: Send + Sync + 'static {
    /// Persist a new notification and return it.
    async fn create(&self, notification: Notification) -> AppResult<Notification>;

    /// Find a notification by its id.
    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>>;

    /// Replace an existing notification. Fails with `NotFound` if the id is
    /// unknown.
    async fn update(&self, notification: Notification) -> AppResult<Notification>;

    /// List notifications for a user, newest first.
    async fn find_by_user(
        &self,
        user_id: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>>;

    /// Count unread notifications for a user.
    async fn count_unread(&self, user_id: UserId) -> AppResult<u64>;

    /// Set `read_at` on every unread notification owned by the user.
    /// Returns the number of records updated; zero matches is not an error.
    async fn mark_all_read(&self, user_id: UserId, now: DateTime<Utc>) -> AppResult<u64>;
}

/// Read access to the program catalog (owned by an external collaborator).
#[async_trait]
pub trait ProgramStore: Send + Sync + 'static {
    /// Persist a new program and return it.
    async fn create(&self, program: Program) -> AppResult<Program>;

    /// Find a program by its id.
    async fn find_by_id(&self, id: ProgramId) -> AppResult<Option<Program>>;
}
