//! In-memory notification store.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use grantflow_core::error::AppError;
use grantflow_core::result::AppResult;
use grantflow_core::types::pagination::{PageRequest, PageResponse};
use grantflow_core::types::{NotificationId, UserId};
use grantflow_entity::notification::Notification;

use crate::traits::NotificationStore;

/// In-memory [`NotificationStore`] backed by an insertion-ordered log.
#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    log: RwLock<Vec<Notification>>,
}

impl MemoryNotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<Notification>>> {
        self.log
            .read()
            .map_err(|_| AppError::internal("Notification store lock poisoned"))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<Notification>>> {
        self.log
            .write()
            .map_err(|_| AppError::internal("Notification store lock poisoned"))
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn create(&self, notification: Notification) -> AppResult<Notification> {
        let mut log = self.write()?;
        if log.iter().any(|n| n.id == notification.id) {
            return Err(AppError::conflict(format!(
                "Notification {} already exists",
                notification.id
            )));
        }
        log.push(notification.clone());
        Ok(notification)
    }

    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        Ok(self.read()?.iter().find(|n| n.id == id).cloned())
    }

    async fn update(&self, notification: Notification) -> AppResult<Notification> {
        let mut log = self.write()?;
        match log.iter_mut().find(|n| n.id == notification.id) {
            Some(row) => {
                *row = notification.clone();
                Ok(notification)
            }
            None => Err(AppError::not_found(format!(
                "Notification {} does not exist",
                notification.id
            ))),
        }
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let log = self.read()?;
        // Log position breaks created_at ties so the latest-stored record
        // always sorts first.
        let mut rows: Vec<(usize, Notification)> = log
            .iter()
            .enumerate()
            .filter(|(_, n)| n.user_id == user_id)
            .map(|(i, n)| (i, n.clone()))
            .collect();
        rows.sort_by(|(ai, a), (bi, b)| b.created_at.cmp(&a.created_at).then(bi.cmp(ai)));

        let total = rows.len() as u64;
        let items: Vec<Notification> = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|(_, n)| n)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count_unread(&self, user_id: UserId) -> AppResult<u64> {
        Ok(self
            .read()?
            .iter()
            .filter(|n| n.user_id == user_id && n.is_unread())
            .count() as u64)
    }

    async fn mark_all_read(&self, user_id: UserId, now: DateTime<Utc>) -> AppResult<u64> {
        let mut log = self.write()?;
        let mut updated = 0u64;
        for row in log.iter_mut() {
            if row.user_id == user_id && row.read_at.is_none() {
                row.read_at = Some(now);
                updated += 1;
            }
        }
        Ok(updated)
    }
}
