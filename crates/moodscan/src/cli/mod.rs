//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod output;
pub mod score;
