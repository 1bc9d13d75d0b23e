use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use quickcap::cli::args::{Cli, Commands};
use quickcap::cli::commands;
use quickcap::error::QuickcapError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), QuickcapError> {
    let cli = Cli::parse();
    let format = cli.output;

    // The reference instant is captured once here; the parser itself
    // never reads the clock.
    let now = match cli.now {
        Some(s) => commands::parse_instant(&s)?,
        None => chrono::Local::now().naive_local(),
    };

    let output = match cli.command {
        Commands::Parse(args) => commands::parse_input(args, now, format)?,
        Commands::Preview(args) => commands::preview(&args, now),
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
