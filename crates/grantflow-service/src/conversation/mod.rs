//! Conversation aggregation.

pub mod aggregator;

pub use aggregator::ConversationService;
