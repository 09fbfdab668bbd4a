//! Time string parsing.
//!
//! Durations and paces are entered as `hh:mm:ss`, `mm:ss`, or a bare number
//! of minutes. Everything is normalized to fractional minutes.

/// Parse a duration or pace string into minutes.
///
/// Accepted forms:
/// - `""` (or whitespace only): zero minutes
/// - `"m"`: whole minutes
/// - `"m:ss"`: minutes and seconds, seconds in `0..=59`
/// - `"h:mm:ss"`: hours, minutes and seconds, minutes and seconds in `0..=59`
///
/// Returns `None` for anything else, including negative fields.
///
/// # Examples
///
/// ```
/// use rundist::core::parse_time;
///
/// assert_eq!(parse_time(""), Some(0.0));
/// assert_eq!(parse_time("5:30"), Some(5.5));
/// assert_eq!(parse_time("1:05:30"), Some(65.5));
/// assert_eq!(parse_time("5:60"), None);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parse_time(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Some(0.0);
    }

    let fields = input
        .split(':')
        .map(|field| field.trim().parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;

    if fields.iter().any(|&field| field < 0) {
        return None;
    }

    match fields.as_slice() {
        &[h, m, s] if m <= 59 && s <= 59 => Some(h as f64 * 60.0 + m as f64 + s as f64 / 60.0),
        &[m, s] if s <= 59 => Some(m as f64 + s as f64 / 60.0),
        &[m] => Some(m as f64),
        _ => None,
    }
}

/// Check whether a string parses as a time value.
#[must_use]
pub fn is_valid_time(input: &str) -> bool {
    parse_time(input).is_some()
}

/// Format fractional minutes back into `h:mm:ss` or `m:ss`.
///
/// Seconds are rounded to the nearest whole second.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_minutes(minutes: f64) -> String {
    let total_seconds = (minutes.abs() * 60.0).round() as i64;
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}
