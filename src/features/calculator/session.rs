//! Segments and saved sessions.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{distance, format_total, Distance};
use crate::error::RunDistError;

/// One duration and pace pair, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Duration text, e.g. `30:00` or `1:05:30`.
    #[serde(default)]
    pub duration: String,
    /// Pace text in minutes per distance unit, e.g. `5:15`.
    #[serde(default)]
    pub pace: String,
}

impl Segment {
    /// Create a segment from raw text.
    #[must_use]
    pub fn new(duration: impl Into<String>, pace: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            pace: pace.into(),
        }
    }

    /// Parse the `DURATION@PACE` form used on the command line.
    ///
    /// Either side may be empty. The text itself is not validated here.
    ///
    /// # Errors
    ///
    /// Returns an error if the `@` separator is missing.
    pub fn parse_arg(arg: &str) -> Result<Self, RunDistError> {
        let (duration, pace) = arg.split_once('@').ok_or_else(|| {
            RunDistError::InvalidArgument(format!(
                "Segment '{arg}' must be written as DURATION@PACE, e.g. 30:00@5:15"
            ))
        })?;

        Ok(Self::new(duration.trim(), pace.trim()))
    }

    /// Format as a `DURATION@PACE` argument.
    #[must_use]
    pub fn to_arg(&self) -> String {
        format!("{}@{}", self.duration, self.pace)
    }

    /// Distance covered in this segment.
    #[must_use]
    pub fn distance(&self) -> Distance {
        distance(&self.duration, &self.pace)
    }
}

/// Sum segment distances, each already rounded to two decimals.
#[must_use]
pub fn total_distance(segments: &[Segment]) -> f64 {
    segments.iter().map(|s| s.distance().value()).sum()
}

/// A saved calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// When the session was saved, ISO-8601 in UTC.
    pub timestamp: String,
    /// Segments at save time.
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Total distance formatted with two decimals.
    pub total_distance: String,
}

impl Session {
    /// Build a session from segments, computing the total.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>, saved_at: DateTime<Utc>) -> Self {
        let total_distance = format_total(total_distance(&segments));
        Self {
            timestamp: saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            segments,
            total_distance,
        }
    }

    /// Recompute the total from the stored segments.
    #[must_use]
    pub fn recomputed_total(&self) -> String {
        format_total(total_distance(&self.segments))
    }

    /// Whether the stored total still agrees with the segments.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self.total_distance.parse::<f64>() {
            Ok(stored) => (stored - total_distance(&self.segments)).abs() < 0.005,
            Err(_) => false,
        }
    }

    /// Parsed timestamp, if it is valid RFC 3339.
    #[must_use]
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.with_timezone(&Utc))
            .ok()
    }

    /// Timestamp for display in local time, falling back to the raw text.
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        self.saved_at().map_or_else(
            || self.timestamp.clone(),
            |t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap()
    }

    #[test]
    fn test_parse_arg() {
        let segment = Segment::parse_arg("30:00@5:15").unwrap();
        assert_eq!(segment, Segment::new("30:00", "5:15"));

        let segment = Segment::parse_arg("@5:00").unwrap();
        assert_eq!(segment.duration, "");
        assert_eq!(segment.pace, "5:00");

        assert!(Segment::parse_arg("30:00").is_err());
    }

    #[test]
    fn test_to_arg() {
        assert_eq!(Segment::new("1:00:00", "6:00").to_arg(), "1:00:00@6:00");
        assert_eq!(Segment::default().to_arg(), "@");
    }

    #[test]
    fn test_session_total() {
        let segments = vec![Segment::new("10:00", "5:00"), Segment::new("5:00", "5:00")];
        let session = Session::from_segments(segments, fixed_time());

        assert_eq!(session.total_distance, "3.00");
        assert_eq!(session.timestamp, "2024-05-01T07:30:00.000Z");
    }

    #[test]
    fn test_invalid_segments_count_as_zero() {
        let segments = vec![Segment::new("10:00", "5:00"), Segment::new("abc", "5:00")];
        let session = Session::from_segments(segments, fixed_time());
        assert_eq!(session.total_distance, "2.00");
    }

    #[test]
    fn test_rounds_each_segment_before_summing() {
        // Each segment is 1/3 unit: 0.33 + 0.33 + 0.33 = 0.99,
        // whereas summing first would give 1.00.
        let segments = vec![Segment::new("1", "3"); 3];
        let session = Session::from_segments(segments, fixed_time());

        assert_eq!(session.total_distance, "0.99");
        assert!(session.is_consistent());
    }

    #[test]
    fn test_serialized_field_names() {
        let session = Session::from_segments(vec![Segment::new("5:00", "5:00")], fixed_time());
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["timestamp"], "2024-05-01T07:30:00.000Z");
        assert_eq!(json["totalDistance"], "1.00");
        assert_eq!(json["segments"][0]["duration"], "5:00");
        assert_eq!(json["segments"][0]["pace"], "5:00");
    }

    #[test]
    fn test_reload_is_idempotent() {
        let segments = vec![
            Segment::new("25:00", "4:45"),
            Segment::new("1:02:10", "5:35"),
            Segment::new("7", "6:01"),
        ];
        let session = Session::from_segments(segments, fixed_time());

        let json = serde_json::to_string(&session).unwrap();
        let reloaded: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded.recomputed_total(), session.total_distance);
        assert!(reloaded.is_consistent());
    }

    #[test]
    fn test_tampered_total_is_inconsistent() {
        let mut session = Session::from_segments(vec![Segment::new("5:00", "5:00")], fixed_time());
        session.total_distance = "2.00".to_string();
        assert!(!session.is_consistent());

        session.total_distance = "n/a".to_string();
        assert!(!session.is_consistent());
    }

    #[test]
    fn test_saved_at() {
        let session = Session::from_segments(vec![], fixed_time());
        assert_eq!(session.saved_at(), Some(fixed_time()));

        let broken = Session {
            timestamp: "yesterday".to_string(),
            segments: vec![],
            total_distance: "0.00".to_string(),
        };
        assert!(broken.saved_at().is_none());
        assert_eq!(broken.display_timestamp(), "yesterday");
    }
}
