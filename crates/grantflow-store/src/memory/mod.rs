//! In-memory store implementations.
//!
//! Applications and programs live in a [`dashmap::DashMap`] keyed by id;
//! messages and notifications live in an insertion-ordered log behind a
//! `RwLock`, because the conversation aggregation tie-breaks equal
//! timestamps by insertion order. Guards are never held across await points.

pub mod application;
pub mod message;
pub mod notification;
pub mod program;

pub use application::MemoryApplicationStore;
pub use message::MemoryMessageStore;
pub use notification::MemoryNotificationStore;
pub use program::MemoryProgramStore;
