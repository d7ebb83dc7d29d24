//! Derived conversation summary.

pub mod summary;

pub use summary::ConversationSummary;
