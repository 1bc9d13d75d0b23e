//! quickcap - natural language task capture parsing
//!
//! This crate turns a single line of free text like
//! "Submit report #work tomorrow at 9am" into a cleaned title, an
//! optional deadline, and an ordered list of tags. The parser is pure
//! and deterministic: the caller supplies the reference instant, so it
//! is safe to run on every keystroke for a live preview as well as once
//! on submission.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use core::{parse, ParsedTask};
pub use error::QuickcapError;
