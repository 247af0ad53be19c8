//! Subcommand implementations.

pub mod config;
pub mod helpers;
pub mod plan;
