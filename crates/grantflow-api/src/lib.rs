//! # grantflow-api
//!
//! HTTP API layer for GrantFlow built on Axum.
//!
//! Provides the REST endpoints for the application lifecycle, messaging,
//! notifications, and conversation listing, plus extractors, DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
