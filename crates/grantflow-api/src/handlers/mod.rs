//! HTTP handlers, organized by domain.

pub mod application;
pub mod conversation;
pub mod health;
pub mod message;
pub mod notification;
