//! Application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grantflow_core::types::{ApplicationId, ProgramId, UserId};

use super::status::ApplicationStatus;

/// A company's application against a funding program.
///
/// Invariant: `submitted_at` is non-null if and only if the status has ever
/// reached [`ApplicationStatus::Submitted`]; it is set at most once and
/// never cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Unique application identifier.
    pub id: ApplicationId,
    /// The funding program this application targets.
    pub program_id: ProgramId,
    /// The applicant company user.
    pub company_id: UserId,
    /// Current lifecycle status.
    pub status: ApplicationStatus,
    /// When the application was first submitted. Set exactly once.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Free-form application data payload.
    pub answers: serde_json::Value,
    /// When the application was created.
    pub created_at: DateTime<Utc>,
    /// When the application was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Create a new application in `Draft` for a company.
    pub fn new_draft(program_id: ProgramId, company_id: UserId, answers: serde_json::Value) -> Self {
        let now = Utc::now();
        Self {
            id: ApplicationId::new(),
            program_id,
            company_id,
            status: ApplicationStatus::Draft,
            submitted_at: None,
            answers,
            created_at: now,
            updated_at: now,
        }
    }
}
