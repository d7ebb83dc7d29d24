//! Notification kind enumeration.

use serde::{Deserialize, Serialize};

/// Kind of a notification, used for filtering and client rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// The status of one of the recipient's applications changed.
    ApplicationStatus,
    /// A new application arrived for one of the recipient's programs.
    NewApplication,
    /// A new message arrived in one of the recipient's threads.
    NewMessage,
}

impl NotificationKind {
    /// Return the kind as its wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApplicationStatus => "APPLICATION_STATUS",
            Self::NewApplication => "NEW_APPLICATION",
            Self::NewMessage => "NEW_MESSAGE",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
