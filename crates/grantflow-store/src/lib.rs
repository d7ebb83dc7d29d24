//! # grantflow-store
//!
//! The Entity Store boundary for GrantFlow. The core services depend only
//! on the store traits defined here; the shipped implementation is the
//! in-memory one in [`memory`]. A transactional backend can be swapped in
//! behind the same traits without touching the services.

pub mod memory;
pub mod traits;

pub use traits::{ApplicationStore, MessageStore, NotificationStore, ProgramStore};
