//! The Notification Dispatcher — the only component that creates
//! notification records.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use grantflow_core::error::AppError;
use grantflow_core::types::pagination::{PageRequest, PageResponse};
use grantflow_core::types::{NotificationId, UserId};
use grantflow_entity::notification::{Notification, NotificationKind};
use grantflow_store::NotificationStore;

use crate::context::RequestContext;

/// Creates notification records and manages their read state.
///
/// Performs no deduplication; callers are responsible for not invoking
/// [`NotificationDispatcher::notify`] redundantly.
#[derive(Clone)]
pub struct NotificationDispatcher {
    /// Notification store.
    notifications: Arc<dyn NotificationStore>,
}

impl NotificationDispatcher {
    /// Creates a new dispatcher.
    pub fn new(notifications: Arc<dyn NotificationStore>) -> Self {
        Self { notifications }
    }

    /// Creates a new unread notification for a user.
    ///
    /// Always succeeds; there is no business validation beyond the typed
    /// recipient id.
    pub async fn notify(
        &self,
        user_id: UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        payload: serde_json::Value,
    ) -> Result<Notification, AppError> {
        let notification = Notification {
            id: NotificationId::new(),
            user_id,
            kind,
            title: title.into(),
            body: body.into(),
            payload,
            read_at: None,
            created_at: Utc::now(),
        };

        let notification = self.notifications.create(notification).await?;

        info!(
            user_id = %user_id,
            notification_id = %notification.id,
            kind = %kind,
            "Notification dispatched"
        );

        Ok(notification)
    }

    /// Marks a notification as read. No-op if already read; `NotFound` if
    /// the id is unknown.
    pub async fn mark_read(
        &self,
        notification_id: NotificationId,
    ) -> Result<Notification, AppError> {
        let mut notification = self
            .notifications
            .find_by_id(notification_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Notification {notification_id} does not exist"))
            })?;

        if notification.read_at.is_some() {
            return Ok(notification);
        }

        notification.read_at = Some(Utc::now());
        self.notifications.update(notification.clone()).await?;
        Ok(notification)
    }

    /// Marks every unread notification of the current user as read and
    /// returns the count updated. Zero matches is not an error.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        let updated = self
            .notifications
            .mark_all_read(ctx.user_id, Utc::now())
            .await?;

        info!(user_id = %ctx.user_id, updated, "Marked all notifications read");
        Ok(updated)
    }

    /// Returns the count of unread notifications for the current user.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notifications.count_unread(ctx.user_id).await
    }

    /// Lists notifications for the current user, newest first.
    pub async fn list_for_user(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notifications.find_by_user(ctx.user_id, &page).await
    }
}
