//! Weekday model.
//!
//! The schedule covers exactly one week, Monday-first. Days are addressed
//! by index 0..=6 during packing and rendered by their English names on
//! the wire, matching the calendar view's column order.

use serde::{Deserialize, Serialize};

/// Number of days in the scheduling horizon.
pub const DAYS_PER_WEEK: usize = 7;

/// A day of the week, Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in calendar order.
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day at the given Monday-based index (0..=6).
    pub fn from_index(index: usize) -> Option<Weekday> {
        Self::ALL.get(index).copied()
    }

    /// Monday-based index of this day (0..=6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// English day name, as rendered in the calendar view.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Weekday::from_index(i), Some(*day));
        }
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn test_monday_first_ordering() {
        assert_eq!(Weekday::from_index(0), Some(Weekday::Monday));
        assert_eq!(Weekday::from_index(6), Some(Weekday::Sunday));
        assert!(Weekday::Monday < Weekday::Sunday);
    }

    #[test]
    fn test_day_names_on_wire() {
        assert_eq!(Weekday::Wednesday.name(), "Wednesday");
        let json = serde_json::to_string(&Weekday::Monday).unwrap();
        assert_eq!(json, "\"Monday\"");
        let back: Weekday = serde_json::from_str("\"Sunday\"").unwrap();
        assert_eq!(back, Weekday::Sunday);
    }
}
