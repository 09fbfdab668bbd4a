//! Calc command implementation.

use chrono::Utc;

use crate::cli::Context;
use crate::error::RunDistError;
use crate::features::calculator::{CalcReport, Calculator, History, Segment};
use crate::output::format_calc;
use crate::storage::SessionStore;

/// Parse `DURATION@PACE` arguments into a calculator.
///
/// # Errors
///
/// Returns an error if an argument lacks the `@` separator.
pub fn calculator_from_args(args: &[String]) -> Result<Calculator, RunDistError> {
    let segments = args
        .iter()
        .map(|arg| Segment::parse_arg(arg))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Calculator::with_segments(segments))
}

/// Save the calculator's segments to `history`, returning the timestamp.
///
/// # Errors
///
/// Returns an error if the history cannot be written.
pub fn save_calculation<S: SessionStore>(
    calculator: &Calculator,
    history: &mut History<S>,
) -> Result<String, RunDistError> {
    let session = calculator.to_session(Utc::now());
    let timestamp = session.timestamp.clone();
    let total = session.total_distance.clone();

    history.save(session)?;
    log::info!("Saved {total} under '{}'", history.key());

    Ok(timestamp)
}

/// Execute the calc command.
///
/// # Errors
///
/// Returns an error if a segment argument is malformed or saving fails.
pub fn calc(ctx: &Context, segments: &[String], save: bool) -> Result<String, RunDistError> {
    let calculator = calculator_from_args(segments)?;
    let mut report = CalcReport::new(calculator.segments(), ctx.unit());

    if save {
        let mut history = ctx.open_history()?;
        report.saved_at = Some(save_calculation(&calculator, &mut history)?);
    }

    format_calc(&report, ctx.format)
}
