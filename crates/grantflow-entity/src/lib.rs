//! # grantflow-entity
//!
//! Domain entity models for GrantFlow. Every struct in this crate represents
//! a stored record or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod application;
pub mod conversation;
pub mod message;
pub mod notification;
pub mod program;
