//! Shared utilities for CLI commands

use std::io::{self, BufRead, Write};

use chrono::{NaiveDate, NaiveDateTime, SecondsFormat};
use tabled::{Table, settings::Style};

use crate::cli::error::{CliError, CliResult};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format a list of names for a table cell
pub fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}

/// Parse a due date given on the command line into Planka's timestamp format.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD HH:MM:SS`,
/// all taken as UTC.
pub fn parse_due_date(input: &str) -> CliResult<String> {
    let input = input.trim();
    let parsed = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
        })
        .map_err(|_| CliError::InvalidInput {
            message: format!(
                "'{}' is not a date (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)",
                input
            ),
        })?;

    Ok(parsed.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Whether a confirmation answer means yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask a yes/no question on the terminal. Anything but yes declines.
pub fn confirm(prompt: &str) -> CliResult<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{} [y/N]: ", prompt)?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
