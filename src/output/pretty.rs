use colored::Colorize;

use crate::core::format_minutes;
use crate::features::calculator::{CalcReport, SegmentReport, Session, SessionReport};

const RULE_WIDTH: usize = 52;

fn input_cell(text: &str, valid: bool) -> String {
    let shown = if text.is_empty() { "-" } else { text };
    let cell = format!("{shown:<10}");
    if valid {
        cell
    } else {
        cell.red().to_string()
    }
}

fn segment_line(segment: &SegmentReport, unit: &str) -> String {
    let distance = format!("{:>8} {unit}", segment.distance.to_string());
    let distance = if segment.distance.is_computed() {
        distance.bold().to_string()
    } else {
        distance.dimmed().to_string()
    };

    let mut line = format!(
        "{:>3}  {}  {}  {}",
        segment.number,
        input_cell(&segment.duration, segment.duration_valid),
        input_cell(&segment.pace, segment.pace_valid),
        distance
    );

    if !segment.is_valid() {
        line.push_str(&format!("  {}", "invalid".red()));
    }
    line
}

/// Format a calculation as a table of segments and a total.
#[must_use]
pub fn format_calc_pretty(report: &CalcReport) -> String {
    let mut output = Vec::new();

    output.push(format!(
        "{:>3}  {:<10}  {:<10}  {:>8}",
        "#", "Duration", "Pace", "Distance"
    ));
    output.push("─".repeat(RULE_WIDTH));

    for segment in &report.segments {
        output.push(segment_line(segment, &report.unit));
    }

    output.push("─".repeat(RULE_WIDTH));
    output.push(
        format!("Total Distance: {} {}", report.total_distance, report.unit)
            .bold()
            .to_string(),
    );

    let invalid = report.invalid_count();
    if invalid > 0 {
        output.push(
            format!(
                "{invalid} segment{} with invalid time (use hh:mm:ss, mm:ss or minutes)",
                if invalid == 1 { "" } else { "s" }
            )
            .yellow()
            .to_string(),
        );
    }

    if let Some(saved_at) = &report.saved_at {
        output.push(format!("Saved to history at {saved_at}").green().to_string());
    }

    output.join("\n")
}

/// Format the history list.
///
/// `total` is the number of saved sessions, which may exceed `sessions.len()`
/// when the listing is limited.
#[must_use]
pub fn format_history_pretty(sessions: &[Session], total: usize, unit: &str) -> String {
    if total == 0 {
        return "No saved calculations.\n\nSave one with: rundist calc <SEGMENT>... --save"
            .to_string();
    }

    let mut output = Vec::new();
    output.push(format!("History ({total} saved)").bold().to_string());
    output.push("─".repeat(RULE_WIDTH));

    for (i, session) in sessions.iter().enumerate() {
        let segments = session.segments.len();
        output.push(format!(
            "{:>3}  {:<17} {:>9} {unit}  {}",
            i + 1,
            session.display_timestamp(),
            session.total_distance,
            format!(
                "{segments} segment{}",
                if segments == 1 { "" } else { "s" }
            )
            .dimmed()
        ));
    }

    if total > sessions.len() {
        output.push(
            format!("… {} more (use --limit)", total - sessions.len())
                .dimmed()
                .to_string(),
        );
    }

    output.join("\n")
}

/// Format one saved session with its recomputed segments.
#[must_use]
pub fn format_session_pretty(report: &SessionReport) -> String {
    let mut output = Vec::new();

    output.push(
        format!(
            "Entry {} · saved {}",
            report.number,
            report.session.display_timestamp()
        )
        .bold()
        .to_string(),
    );
    output.push(format!(
        "Stored total: {} {}",
        report.session.total_distance, report.recomputed.unit
    ));
    output.push(String::new());
    output.push(format_calc_pretty(&report.recomputed));

    if !report.consistent {
        output.push(
            format!(
                "Stored total {} differs from recomputed {}",
                report.session.total_distance, report.recomputed.total_distance
            )
            .yellow()
            .to_string(),
        );
    }

    output.join("\n")
}

/// Format a parsed time value.
#[must_use]
pub fn format_parse_pretty(input: &str, minutes: Option<f64>) -> String {
    match minutes {
        Some(m) => format!(
            "{input} = {} minutes ({})",
            format!("{m:.4}").trim_end_matches('0').trim_end_matches('.'),
            format_minutes(m)
        ),
        None => format!(
            "{} is not a valid time (use hh:mm:ss, mm:ss or minutes)",
            input.red()
        ),
    }
}
