//! Distance calculation from a duration and a pace.

use std::fmt;

use serde::{Serialize, Serializer};

use super::time::parse_time;

/// Result of a single duration/pace calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// One side is missing, invalid, or zero. Displays as `0`.
    Incomplete,
    /// Distance rounded to two decimals.
    Computed(f64),
}

impl Distance {
    /// Numeric value in distance units; `0.0` for incomplete input.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Incomplete => 0.0,
            Self::Computed(d) => *d,
        }
    }

    /// Whether a distance was actually computed.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "0"),
            Self::Computed(d) => write!(f, "{d:.2}"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a distance total with exactly two decimals.
#[must_use]
pub fn format_total(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// Compute the distance covered in `duration` at `pace` (minutes per unit).
///
/// Invalid or zero input on either side yields [`Distance::Incomplete`]
/// rather than an error.
///
/// # Examples
///
/// ```
/// use rundist::core::distance;
///
/// assert_eq!(distance("10:00", "5:00").to_string(), "2.00");
/// assert_eq!(distance("", "5:00").to_string(), "0");
/// ```
#[must_use]
pub fn distance(duration: &str, pace: &str) -> Distance {
    let (Some(duration), Some(pace)) = (parse_time(duration), parse_time(pace)) else {
        return Distance::Incomplete;
    };

    if duration == 0.0 || pace == 0.0 {
        return Distance::Incomplete;
    }

    Distance::Computed(round2(duration / pace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_whole_units() {
        assert_eq!(distance("5:00", "5:00").to_string(), "1.00");
        assert_eq!(distance("10:00", "5:00").to_string(), "2.00");
        assert_eq!(distance("1:00:00", "6:00").to_string(), "10.00");
    }

    #[test]
    fn test_fractional_distance() {
        assert_eq!(distance("30:00", "5:30").to_string(), "5.45");
        assert_eq!(distance("25", "4:45").value(), 5.26);
    }

    #[test]
    fn test_empty_duration_is_zero() {
        assert_eq!(distance("", "5:00"), Distance::Incomplete);
        assert_eq!(distance("", "5:00").to_string(), "0");
        assert_eq!(distance("5:00", "").to_string(), "0");
    }

    #[test]
    fn test_zero_pace_guarded() {
        assert_eq!(distance("5:00", "0").to_string(), "0");
        assert_eq!(distance("5:00", "0:00").to_string(), "0");
        assert_eq!(distance("5:00", "0:00:00").value(), 0.0);
    }

    #[test]
    fn test_invalid_input_is_zero() {
        assert_eq!(distance("abc", "5:00"), Distance::Incomplete);
        assert_eq!(distance("5:00", "5:60"), Distance::Incomplete);
        assert!(!distance("1:2:3:4", "5").is_computed());
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        // 1 minute at 8 min/unit is exactly 0.125
        assert_eq!(distance("1", "8").to_string(), "0.13");
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(0.0), "0.00");
        assert_eq!(format_total(3.456), "3.46");
        assert_eq!(format_total(10.0), "10.00");
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&distance("10:00", "5:00")).unwrap();
        assert_eq!(json, "\"2.00\"");
        let json = serde_json::to_string(&Distance::Incomplete).unwrap();
        assert_eq!(json, "\"0\"");
    }

    proptest! {
        #[test]
        fn prop_distance_non_negative(d in 0u32..600, p in 0u32..30) {
            let value = distance(&d.to_string(), &p.to_string()).value();
            prop_assert!(value >= 0.0);
        }

        #[test]
        fn prop_monotonic_in_duration(d in 1u32..600, extra in 0u32..600, p in 1u32..30) {
            let shorter = distance(&d.to_string(), &p.to_string()).value();
            let longer = distance(&(d + extra).to_string(), &p.to_string()).value();
            prop_assert!(longer >= shorter);
        }

        #[test]
        fn prop_decreasing_in_pace(d in 1u32..600, p in 1u32..30, slower in 0u32..30) {
            let fast = distance(&d.to_string(), &p.to_string()).value();
            let slow = distance(&d.to_string(), &(p + slower).to_string()).value();
            prop_assert!(slow <= fast);
        }

        #[test]
        fn prop_mmss_matches_minutes(m in 0u32..120, s in 0u32..60, p in 1u32..20) {
            let duration = format!("{m}:{s:02}");
            let expected = round2((f64::from(m) + f64::from(s) / 60.0) / f64::from(p));
            let got = distance(&duration, &p.to_string());
            if m == 0 && s == 0 {
                prop_assert_eq!(got, Distance::Incomplete);
            } else {
                prop_assert_eq!(got.value(), expected);
            }
        }
    }
}
