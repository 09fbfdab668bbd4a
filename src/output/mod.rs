//! Output formatting for rundist.
//!
//! Calculations and history render either as colored text or as JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::RunDistError;
use crate::features::calculator::{CalcReport, Session, SessionReport};

pub use json::*;
pub use pretty::*;

/// Format a calculation based on output format
///
/// # Errors
///
/// Returns `RunDistError::Json` if JSON serialization fails.
pub fn format_calc(report: &CalcReport, format: OutputFormat) -> Result<String, RunDistError> {
    match format {
        OutputFormat::Pretty => Ok(format_calc_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format the history list based on output format
///
/// # Errors
///
/// Returns `RunDistError::Json` if JSON serialization fails.
pub fn format_history(
    sessions: &[Session],
    total: usize,
    unit: &str,
    format: OutputFormat,
) -> Result<String, RunDistError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions, total, unit)),
        OutputFormat::Json => format_history_json(sessions, total),
    }
}

/// Format one saved session based on output format
///
/// # Errors
///
/// Returns `RunDistError::Json` if JSON serialization fails.
pub fn format_session(report: &SessionReport, format: OutputFormat) -> Result<String, RunDistError> {
    match format {
        OutputFormat::Pretty => Ok(format_session_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format a parsed time based on output format
///
/// # Errors
///
/// Returns `RunDistError::Json` if JSON serialization fails.
pub fn format_parse(
    input: &str,
    minutes: Option<f64>,
    format: OutputFormat,
) -> Result<String, RunDistError> {
    match format {
        OutputFormat::Pretty => Ok(format_parse_pretty(input, minutes)),
        OutputFormat::Json => format_parse_json(input, minutes),
    }
}
