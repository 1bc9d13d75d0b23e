//! Pretty output formatting for quickcap.

use colored::Colorize;

use crate::core::ParsedTask;

/// Format a parse result as a multi-line colored block.
#[must_use]
pub fn format_parsed_pretty(task: &ParsedTask) -> String {
    let mut output = if task.title.is_empty() {
        format!("{}\n", "(no title)".dimmed())
    } else {
        format!("{}\n", task.title.bold())
    };

    if let Some(deadline) = task.deadline {
        output.push_str(&format!(
            "  {} {}\n",
            "Due:".red(),
            deadline.format("%a %Y-%m-%d %H:%M")
        ));
    }

    if !task.tags.is_empty() {
        let tags_str: Vec<String> = task.tags.iter().map(|t| format!("#{t}")).collect();
        output.push_str(&format!("  {} {}\n", "Tags:".yellow(), tags_str.join(" ")));
    }

    output
}

/// Render the one-line live preview, e.g. "Submit report due Tue 9:00 AM #work".
#[must_use]
pub fn render_preview(task: &ParsedTask) -> String {
    let mut parts = Vec::new();

    if !task.title.is_empty() {
        parts.push(task.title.clone());
    }
    if let Some(deadline) = task.deadline {
        parts.push(
            format!("due {}", deadline.format("%a %-I:%M %p"))
                .yellow()
                .to_string(),
        );
    }
    for tag in &task.tags {
        parts.push(format!("#{tag}").cyan().to_string());
    }

    parts.join(" ")
}
