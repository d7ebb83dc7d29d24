//! In-memory application store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use grantflow_core::error::AppError;
use grantflow_core::result::AppResult;
use grantflow_core::types::{ApplicationId, UserId};
use grantflow_entity::application::Application;

use crate::traits::ApplicationStore;

/// In-memory [`ApplicationStore`] backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryApplicationStore {
    rows: DashMap<Uuid, Application>,
}

impl MemoryApplicationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationStore for MemoryApplicationStore {
    async fn create(&self, application: Application) -> AppResult<Application> {
        if self.rows.contains_key(application.id.as_uuid()) {
            return Err(AppError::conflict(format!(
                "Application {} already exists",
                application.id
            )));
        }
        self.rows
            .insert(application.id.into_uuid(), application.clone());
        Ok(application)
    }

    async fn find_by_id(&self, id: ApplicationId) -> AppResult<Option<Application>> {
        Ok(self.rows.get(id.as_uuid()).map(|row| row.clone()))
    }

    async fn update(&self, application: Application) -> AppResult<Application> {
        match self.rows.get_mut(application.id.as_uuid()) {
            Some(mut row) => {
                *row = application.clone();
                Ok(application)
            }
            None => Err(AppError::not_found(format!(
                "Application {} does not exist",
                application.id
            ))),
        }
    }

    async fn find_by_company(&self, company_id: UserId) -> AppResult<Vec<Application>> {
        let mut rows: Vec<Application> = self
            .rows
            .iter()
            .filter(|row| row.company_id == company_id)
            .map(|row| row.clone())
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
