//! Calculator state.
//!
//! Owns the segment list being edited. The list is never empty.

use chrono::{DateTime, Utc};

use super::session::{total_distance, Segment, Session};
use crate::core::Distance;
use crate::error::RunDistError;

/// The segments of a run being calculated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    segments: Vec<Segment>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with a single empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: vec![Segment::default()],
        }
    }

    /// Create a calculator from existing segments.
    ///
    /// An empty list yields a single empty segment.
    #[must_use]
    pub fn with_segments(segments: Vec<Segment>) -> Self {
        let mut calculator = Self::new();
        calculator.replace_segments(segments);
        calculator
    }

    /// Current segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append an empty segment and return its index.
    pub fn add_segment(&mut self) -> usize {
        self.segments.push(Segment::default());
        self.segments.len() - 1
    }

    /// Remove the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or it is the last segment.
    pub fn remove_segment(&mut self, index: usize) -> Result<Segment, RunDistError> {
        self.check_index(index)?;
        if self.segments.len() == 1 {
            return Err(RunDistError::InvalidArgument(
                "Cannot remove the only segment".to_string(),
            ));
        }
        Ok(self.segments.remove(index))
    }

    /// Replace the duration text of a segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_duration(&mut self, index: usize, duration: &str) -> Result<(), RunDistError> {
        self.check_index(index)?;
        self.segments[index].duration = duration.to_string();
        Ok(())
    }

    /// Replace the pace text of a segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_pace(&mut self, index: usize, pace: &str) -> Result<(), RunDistError> {
        self.check_index(index)?;
        self.segments[index].pace = pace.to_string();
        Ok(())
    }

    /// Distance of each segment, in order.
    #[must_use]
    pub fn segment_distances(&self) -> Vec<Distance> {
        self.segments.iter().map(Segment::distance).collect()
    }

    /// Sum of the rounded segment distances.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        total_distance(&self.segments)
    }

    /// Snapshot the current segments as a session saved at `saved_at`.
    #[must_use]
    pub fn to_session(&self, saved_at: DateTime<Utc>) -> Session {
        Session::from_segments(self.segments.clone(), saved_at)
    }

    /// Replace the current segments with a copy of a saved session's.
    pub fn load(&mut self, session: &Session) {
        self.replace_segments(session.segments.clone());
    }

    fn replace_segments(&mut self, segments: Vec<Segment>) {
        self.segments = if segments.is_empty() {
            vec![Segment::default()]
        } else {
            segments
        };
    }

    fn check_index(&self, index: usize) -> Result<(), RunDistError> {
        if index < self.segments.len() {
            Ok(())
        } else {
            Err(RunDistError::NotFound(format!(
                "Segment {} (have {})",
                index + 1,
                self.segments.len()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_has_one_empty_segment() {
        let calc = Calculator::new();
        assert_eq!(calc.segments(), &[Segment::default()]);
        assert_eq!(calc.total_distance(), 0.0);
    }

    #[test]
    fn test_edit_segments() {
        let mut calc = Calculator::new();
        calc.set_duration(0, "10:00").unwrap();
        calc.set_pace(0, "5:00").unwrap();

        let idx = calc.add_segment();
        assert_eq!(idx, 1);
        calc.set_duration(idx, "30:00").unwrap();
        calc.set_pace(idx, "6:00").unwrap();

        let distances: Vec<String> = calc
            .segment_distances()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(distances, vec!["2.00", "5.00"]);
        assert!((calc.total_distance() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_incomplete_segment_shows_zero() {
        let mut calc = Calculator::new();
        calc.set_pace(0, "5:00").unwrap();
        assert_eq!(calc.segment_distances()[0].to_string(), "0");
    }

    #[test]
    fn test_cannot_remove_last_segment() {
        let mut calc = Calculator::new();
        assert!(calc.remove_segment(0).is_err());

        calc.add_segment();
        assert!(calc.remove_segment(1).is_ok());
        assert_eq!(calc.segments().len(), 1);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut calc = Calculator::new();
        assert!(matches!(
            calc.set_duration(3, "5:00"),
            Err(RunDistError::NotFound(_))
        ));
        assert!(calc.set_pace(1, "5:00").is_err());
        assert!(calc.remove_segment(5).is_err());
    }

    #[test]
    fn test_load_replaces_segments() {
        let saved_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let source = Calculator::with_segments(vec![
            Segment::new("20:00", "4:00"),
            Segment::new("10:00", "5:00"),
        ]);
        let session = source.to_session(saved_at);

        let mut calc = Calculator::new();
        calc.load(&session);
        assert_eq!(calc.segments(), session.segments.as_slice());

        // Editing the loaded copy does not touch the session
        calc.set_pace(0, "2:00").unwrap();
        assert_eq!(session.segments[0].pace, "4:00");
    }

    #[test]
    fn test_load_empty_session() {
        let session = Session {
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            segments: vec![],
            total_distance: "0.00".to_string(),
        };

        let mut calc = Calculator::with_segments(vec![Segment::new("5", "5")]);
        calc.load(&session);
        assert_eq!(calc.segments(), &[Segment::default()]);
    }

    #[test]
    fn test_to_session_matches_total() {
        let saved_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let calc = Calculator::with_segments(vec![
            Segment::new("1:05:30", "5:30"),
            Segment::new("12:00", "4:00"),
        ]);

        let session = calc.to_session(saved_at);
        // 65.5 / 5.5 = 11.909.. -> 11.91, plus 3.00
        assert_eq!(session.total_distance, "14.91");
    }
}
