//! Calculation reports for display.

use serde::Serialize;

use super::session::{Segment, Session};
use crate::core::{format_total, is_valid_time, Distance};

/// One segment's inputs and result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentReport {
    /// 1-based position.
    pub number: usize,
    pub duration: String,
    pub pace: String,
    pub duration_valid: bool,
    pub pace_valid: bool,
    pub distance: Distance,
}

impl SegmentReport {
    fn new(number: usize, segment: &Segment) -> Self {
        Self {
            number,
            duration: segment.duration.clone(),
            pace: segment.pace.clone(),
            duration_valid: is_valid_time(&segment.duration),
            pace_valid: is_valid_time(&segment.pace),
            distance: segment.distance(),
        }
    }

    /// Whether both inputs parse.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.duration_valid && self.pace_valid
    }
}

/// Per-segment distances and their total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcReport {
    pub segments: Vec<SegmentReport>,
    pub total_distance: String,
    pub unit: String,
    /// Set when the calculation was written to history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl CalcReport {
    /// Build a report for `segments`.
    #[must_use]
    pub fn new(segments: &[Segment], unit: &str) -> Self {
        let reports: Vec<SegmentReport> = segments
            .iter()
            .enumerate()
            .map(|(i, s)| SegmentReport::new(i + 1, s))
            .collect();
        let total: f64 = reports.iter().map(|r| r.distance.value()).sum();

        Self {
            segments: reports,
            total_distance: format_total(total),
            unit: unit.to_string(),
            saved_at: None,
        }
    }

    /// Number of segments with at least one invalid input.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.segments.iter().filter(|s| !s.is_valid()).count()
    }
}

/// A saved session next to a fresh recomputation of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    /// 1-based history position.
    pub number: usize,
    pub session: Session,
    pub recomputed: CalcReport,
    /// Whether the stored total matches the recomputed one.
    pub consistent: bool,
}

impl SessionReport {
    /// Recompute `session`, found at history position `number`.
    #[must_use]
    pub fn new(number: usize, session: Session, unit: &str) -> Self {
        let recomputed = CalcReport::new(&session.segments, unit);
        let consistent = session.is_consistent();
        Self {
            number,
            session,
            recomputed,
            consistent,
        }
    }
}
