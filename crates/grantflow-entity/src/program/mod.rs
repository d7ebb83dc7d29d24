//! Funding program entity.

pub mod model;

pub use model::Program;
