//! # grantflow-service
//!
//! Business logic service layer for GrantFlow. Each service orchestrates
//! the entity stores to implement application-level use cases: the
//! application lifecycle state machine, notification fan-out, message
//! delivery, and conversation aggregation.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod conversation;
pub mod lifecycle;
pub mod message;
pub mod notification;

pub use context::RequestContext;
pub use conversation::ConversationService;
pub use lifecycle::LifecycleService;
pub use message::MessageService;
pub use notification::NotificationDispatcher;
