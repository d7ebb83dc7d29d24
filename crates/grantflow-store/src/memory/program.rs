//! In-memory program store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use grantflow_core::error::AppError;
use grantflow_core::result::AppResult;
use grantflow_core::types::ProgramId;
use grantflow_entity::program::Program;

use crate::traits::ProgramStore;

/// In-memory [`ProgramStore`] backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryProgramStore {
    rows: DashMap<Uuid, Program>,
}

impl MemoryProgramStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgramStore for MemoryProgramStore {
    async fn create(&self, program: Program) -> AppResult<Program> {
        if self.rows.contains_key(program.id.as_uuid()) {
            return Err(AppError::conflict(format!(
                "Program {} already exists",
                program.id
            )));
        }
        self.rows.insert(program.id.into_uuid(), program.clone());
        Ok(program)
    }

    async fn find_by_id(&self, id: ProgramId) -> AppResult<Option<Program>> {
        Ok(self.rows.get(id.as_uuid()).map(|row| row.clone()))
    }
}
