//! JSON output formatting for rundist.

use serde::Serialize;
use serde_json::json;

use crate::error::RunDistError;
use crate::features::calculator::Session;

/// Format a history listing as JSON.
///
/// # Errors
///
/// Returns `RunDistError::Json` if serialization fails.
pub fn format_history_json(sessions: &[Session], total: usize) -> Result<String, RunDistError> {
    let items: Vec<_> = sessions
        .iter()
        .enumerate()
        .map(|(i, session)| {
            json!({
                "number": i + 1,
                "timestamp": session.timestamp,
                "segments": session.segments,
                "totalDistance": session.total_distance,
            })
        })
        .collect();

    let output = json!({
        "count": total,
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a parsed time as JSON.
///
/// # Errors
///
/// Returns `RunDistError::Json` if serialization fails.
pub fn format_parse_json(input: &str, minutes: Option<f64>) -> Result<String, RunDistError> {
    let output = json!({
        "input": input,
        "valid": minutes.is_some(),
        "minutes": minutes,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `RunDistError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RunDistError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::calculator::Segment;
    use chrono::{TimeZone, Utc};

    fn make_session(duration: &str) -> Session {
        let saved_at = Utc.with_ymd_and_hms(2024, 6, 2, 6, 0, 0).unwrap();
        Session::from_segments(vec![Segment::new(duration, "5:00")], saved_at)
    }

    #[test]
    fn test_format_history_json_empty() {
        let result = format_history_json(&[], 0).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_history_json_numbers_entries() {
        let sessions = vec![make_session("10:00"), make_session("5:00")];
        let value: serde_json::Value =
            serde_json::from_str(&format_history_json(&sessions, 5).unwrap()).unwrap();

        assert_eq!(value["count"], 5);
        assert_eq!(value["items"][0]["number"], 1);
        assert_eq!(value["items"][0]["totalDistance"], "2.00");
        assert_eq!(value["items"][1]["number"], 2);
        assert_eq!(value["items"][1]["segments"][0]["pace"], "5:00");
    }

    #[test]
    fn test_format_parse_json() {
        let value: serde_json::Value =
            serde_json::from_str(&format_parse_json("5:30", Some(5.5)).unwrap()).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["minutes"], 5.5);

        let value: serde_json::Value =
            serde_json::from_str(&format_parse_json("5:60", None).unwrap()).unwrap();
        assert_eq!(value["valid"], false);
        assert!(value["minutes"].is_null());
    }

    #[test]
    fn test_to_json() {
        let result = to_json(&make_session("5:00")).unwrap();
        assert!(result.contains("\"totalDistance\": \"1.00\""));
    }
}
