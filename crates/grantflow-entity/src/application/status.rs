//! Application status enumeration and the transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a grant application.
///
/// The transition table is explicit: a status change is only permitted if
/// the requested status appears in [`ApplicationStatus::successors`] of the
/// current status. Everything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Being edited by the company; not yet visible to the organization.
    Draft,
    /// Submitted for consideration.
    Submitted,
    /// Being evaluated by the organization.
    UnderReview,
    /// Accepted for funding.
    Approved,
    /// Declined.
    Rejected,
}

impl ApplicationStatus {
    /// The statuses reachable from this one in a single transition.
    pub fn successors(&self) -> &'static [ApplicationStatus] {
        match self {
            Self::Draft => &[Self::Submitted],
            Self::Submitted => &[Self::UnderReview],
            Self::UnderReview => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    /// Check whether a transition to `next` is permitted from this status.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        self.successors().contains(&next)
    }

    /// Check if the application is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Return the status as its wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
