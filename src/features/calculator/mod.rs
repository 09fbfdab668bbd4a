//! Running distance calculator.
//!
//! - Segments of duration and pace, edited in a [`Calculator`]
//! - Per-segment and total distance
//! - Saved sessions kept in a [`History`]

pub mod history;
pub mod report;
pub mod session;
pub mod state;

pub use history::History;
pub use report::{CalcReport, SegmentReport, SessionReport};
pub use session::{total_distance, Segment, Session};
pub use state::Calculator;
