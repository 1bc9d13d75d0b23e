//! Command implementations for quickcap.

mod parse;

pub use parse::{parse_input, parse_instant, preview};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::QuickcapError;

/// Generate a shell completion script.
///
/// # Errors
///
/// Returns `QuickcapError::Completions` if the generated script is not
/// valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, QuickcapError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "quickcap", &mut buf);
    String::from_utf8(buf).map_err(|e| QuickcapError::Completions(format!("UTF-8 error: {e}")))
}
