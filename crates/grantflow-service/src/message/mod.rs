//! Message delivery.

pub mod service;

pub use service::MessageService;
