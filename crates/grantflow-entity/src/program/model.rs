//! Funding program entity model.
//!
//! Program catalog CRUD lives outside this core; the model is carried so
//! the lifecycle manager can resolve the program title and the owning
//! organization user when fanning out notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grantflow_core::types::{ProgramId, UserId};

/// A funding program published by an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Unique program identifier.
    pub id: ProgramId,
    /// The organization user that owns this program.
    pub owner_id: UserId,
    /// Program title, referenced in notification text.
    pub title: String,
    /// When the program was created.
    pub created_at: DateTime<Utc>,
}

impl Program {
    /// Create a new program.
    pub fn new(owner_id: UserId, title: impl Into<String>) -> Self {
        Self {
            id: ProgramId::new(),
            owner_id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}
