use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "quickcap")]
#[command(about = "A natural language quick-capture parser for task managers")]
#[command(long_about = "quickcap - natural language task capture

Turns a single line of free text into a cleaned title, an optional
deadline, and a list of tags. The same parse runs for a live preview
on every keystroke and once on submission, so it is deterministic and
never reads the clock itself.

QUICK START:
  quickcap parse \"Submit report #work tomorrow at 9am\"
  quickcap preview \"buy milk #errands at 6pm\"
  quickcap parse \"pay rent today\" -o json

SUPPORTED PATTERNS (first match wins, top priority first):
  tomorrow at 9am         tomorrow at the given time
  today at 15:30          today at the given time
  next friday             next occurrence, 9:00 AM
  on monday               next occurrence, 9:00 AM (never today)
  tomorrow                tomorrow 9:00 AM
  today                   today 11:59 PM
  at 6pm                  today at the given time
  in 45 minutes / 2 hours offset from now
  #tag                    hashtags anywhere in the text

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  quickcap <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Reference instant treated as "now" (e.g. 2026-08-30T14:00)
    ///
    /// Every date rule in one invocation resolves against this single
    /// instant. Defaults to the current local time; pass it explicitly
    /// (or set QUICKCAP_NOW) for reproducible output in scripts.
    #[arg(short, long, global = true, env = "QUICKCAP_NOW")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a line of task input into title, deadline, and tags
    ///
    /// This is the submission path: the parsed result can be merged
    /// with explicitly supplied values before a task is created.
    ///
    /// # Examples
    ///
    ///   quickcap parse "Submit report #work tomorrow at 9am"
    ///   quickcap parse "pay rent today" --tag finance
    ///   quickcap parse "ship release" --deadline 2026-09-04T17:00
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Render a one-line preview of how the input will be captured
    ///
    /// This is the live-preview path: cheap, read-only, and meant to
    /// run on every input change. Prints e.g.
    /// "Submit report due Tue 9:00 AM #work".
    Preview(PreviewArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   quickcap completions bash > /usr/local/etc/bash_completion.d/quickcap
    ///   source <(quickcap completions zsh)
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    /// The raw task text, e.g. "Submit report #work tomorrow at 9am"
    pub text: String,

    /// Extra tag merged with the parsed ones (repeatable, deduplicated)
    #[arg(short, long = "tag")]
    pub tags: Option<Vec<String>>,

    /// Explicit deadline; takes precedence over any parsed from the text
    #[arg(short, long)]
    pub deadline: Option<String>,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// The current draft text
    pub text: String,
}
