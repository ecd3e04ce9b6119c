//! Classification of a single raw subject cell.

use std::fmt;

use crate::schema::MAX_MARKS;

/// Marker entered for a student who did not sit the paper.
pub const ABSENT_MARKER: &str = "AB";

/// Magnitude from which a number is no longer read as a mark. Eight marks just
/// under it still sum within `i128`.
const MARK_LIMIT: f64 = 1e36;

/// What a subject cell turned out to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Empty cell or the absence marker.
    Absent,
    /// A number; the float is truncated toward zero, never rounded.
    Numeric(i128),
    /// Anything else.
    Unparseable,
}

impl Mark {
    /// Classify a raw subject cell
    ///
    /// Empty cells and `AB` in any case are absent. Anything that parses as a
    /// finite number, surrounding whitespace allowed, is a mark truncated toward
    /// zero. Everything else is unparseable.
    ///
    /// # Arguments
    /// * `raw` - The cell text after sentinel blanking
    ///
    /// # Returns
    /// * `Mark` - The classification of the cell
    ///
    /// # Examples
    /// ```
    /// use student_finder::Mark;
    ///
    /// assert_eq!(Mark::classify("45.9"), Mark::Numeric(45));
    /// assert_eq!(Mark::classify("ab"), Mark::Absent);
    /// assert_eq!(Mark::classify("xyz").to_string(), "N/A");
    /// ```
    pub fn classify(raw: &str) -> Mark {
        if raw.is_empty() || raw.eq_ignore_ascii_case(ABSENT_MARKER) {
            return Mark::Absent;
        }

        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value.abs() < MARK_LIMIT => {
                Mark::Numeric(value.trunc() as i128)
            }
            _ => Mark::Unparseable,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Mark::Numeric(_))
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Absent => f.write_str("Absent"),
            Mark::Numeric(mark) => write!(f, "{mark}/{MAX_MARKS}"),
            Mark::Unparseable => f.write_str("N/A"),
        }
    }
}
