//! Command-line interface for quickcap.

pub mod args;
pub mod commands;
