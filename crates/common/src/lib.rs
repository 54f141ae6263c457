//! Shared building blocks for the bookerma workspace: logging setup,
//! small response types and startup environment checks.

pub mod types;
pub mod utils;
pub mod env;
