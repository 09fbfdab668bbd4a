//! History command implementation.
//!
//! Entry numbers on the command line are 1-based, most recent first.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{HistoryCommands, OutputFormat};
use crate::cli::Context;
use crate::error::RunDistError;
use crate::features::calculator::{History, SessionReport};
use crate::output::{format_history, format_session, to_json};
use crate::storage::SessionStore;

/// Execute history subcommands.
///
/// # Errors
///
/// Returns an error if the history cannot be read or written, or an entry
/// number does not exist.
pub fn history(ctx: &Context, cmd: HistoryCommands) -> Result<String, RunDistError> {
    let mut history = ctx.open_history()?;
    let unit = ctx.unit();

    match cmd {
        HistoryCommands::List { limit } => {
            let limit = limit.unwrap_or(ctx.config.calculator.history_limit);
            list_sessions(&history, limit, unit, ctx.format)
        }
        HistoryCommands::Show { number } => show_session(&history, number, unit, ctx.format),
        HistoryCommands::Load { number } => load_session(&history, number, ctx.format),
        HistoryCommands::Delete { number } => delete_session(&mut history, number, ctx.format),
        HistoryCommands::Clear { force } => clear_sessions(&mut history, force, ctx.format),
    }
}

/// Convert a 1-based entry number to an index.
fn entry_index(number: usize) -> Result<usize, RunDistError> {
    number
        .checked_sub(1)
        .ok_or_else(|| RunDistError::InvalidArgument("Entry numbers start at 1".to_string()))
}

fn list_sessions<S: SessionStore>(
    history: &History<S>,
    limit: usize,
    unit: &str,
    format: OutputFormat,
) -> Result<String, RunDistError> {
    let sessions = history.list()?;
    let total = sessions.len();
    let shown: Vec<_> = sessions.into_iter().take(limit).collect();

    format_history(&shown, total, unit, format)
}

fn show_session<S: SessionStore>(
    history: &History<S>,
    number: usize,
    unit: &str,
    format: OutputFormat,
) -> Result<String, RunDistError> {
    let session = history.get(entry_index(number)?)?;
    let report = SessionReport::new(number, session, unit);

    if !report.consistent {
        log::warn!(
            "History entry {number}: stored total {} does not match recomputed {}",
            report.session.total_distance,
            report.recomputed.total_distance
        );
    }

    format_session(&report, format)
}

/// Print a saved session's segments so they can be fed back to `calc`.
fn load_session<S: SessionStore>(
    history: &History<S>,
    number: usize,
    format: OutputFormat,
) -> Result<String, RunDistError> {
    let session = history.get(entry_index(number)?)?;

    match format {
        OutputFormat::Json => to_json(&session.segments),
        OutputFormat::Pretty => {
            let args: Vec<String> = session
                .segments
                .iter()
                .map(|s| shell_quote(&s.to_arg()))
                .collect();
            Ok(format!("rundist calc {}", args.join(" ")))
        }
    }
}

fn delete_session<S: SessionStore>(
    history: &mut History<S>,
    number: usize,
    format: OutputFormat,
) -> Result<String, RunDistError> {
    let removed = history.delete(entry_index(number)?)?;
    log::info!("Deleted history entry {number} ({})", removed.timestamp);

    match format {
        OutputFormat::Json => to_json(&json!({ "deleted": removed })),
        OutputFormat::Pretty => Ok(format!(
            "Deleted entry {number}: {} ({})",
            removed.total_distance,
            removed.display_timestamp()
        )),
    }
}

fn clear_sessions<S: SessionStore>(
    history: &mut History<S>,
    force: bool,
    format: OutputFormat,
) -> Result<String, RunDistError> {
    if !force {
        return Err(RunDistError::InvalidArgument(
            "This will delete all saved calculations.\nUse --force to confirm.".to_string(),
        ));
    }

    let count = history.len()?;
    history.clear()?;
    log::info!("Cleared {count} history entries under '{}'", history.key());

    match format {
        OutputFormat::Json => to_json(&json!({ "cleared": count })),
        OutputFormat::Pretty => Ok(format!("History cleared ({count} removed).").green().to_string()),
    }
}

fn shell_quote(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(|c| c.is_ascii_alphanumeric() || "@:.-_".contains(c)) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
