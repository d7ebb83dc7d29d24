//! Application lifecycle management.

pub mod service;

pub use service::LifecycleService;
