//! Notification dispatch and read-state management.

pub mod dispatcher;

pub use dispatcher::NotificationDispatcher;
