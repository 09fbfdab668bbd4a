//! Core calculations for rundist.
//!
//! Time parsing and distance computation. Both are pure and total: malformed
//! input never produces an error.

mod distance;
mod time;

pub use distance::{distance, format_total, round2, Distance};
pub use time::{format_minutes, is_valid_time, parse_time};
