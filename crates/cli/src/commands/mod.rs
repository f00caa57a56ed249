//! Subcommand implementations.

pub mod eval;
pub mod sweep;
