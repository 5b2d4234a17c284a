//! CLI library components for rowcheck.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
