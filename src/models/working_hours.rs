//! Working-hours window.
//!
//! Defines the daily window tasks may be placed in. The window is
//! identical for every day of the week; its length is the daily capacity.
//!
//! # Time Model
//! Whole hours of day, `[start, end)` half-open. `end > start` is the
//! window invariant; an inverted or empty window is rejected before any
//! scheduling run.

use serde::{Deserialize, Serialize};

/// Daily working-hours window `[start, end)` in whole hours of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// First working hour (0..=23, inclusive).
    pub start: u8,
    /// End of the window (0..=23, exclusive). Must exceed `start`.
    pub end: u8,
}

impl WorkingHours {
    /// Creates a window. Validity is checked by [`WorkingHours::is_valid`]
    /// at the scheduling boundary, not here.
    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Parses a window from `HH:MM` clock strings.
    ///
    /// Only the hour component is consumed; minutes are ignored, matching
    /// the whole-hour granularity of the core. Returns `None` when either
    /// string has no leading hour in `0..=23`.
    pub fn from_clock(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: parse_hour(start)?,
            end: parse_hour(end)?,
        })
    }

    /// Whether the window is well-formed (`end > start`).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Hours placeable on a single day.
    #[inline]
    pub fn daily_capacity(&self) -> u8 {
        self.end.saturating_sub(self.start)
    }

    /// Total hours placeable across the whole week.
    #[inline]
    pub fn week_capacity(&self) -> u32 {
        u32::from(self.daily_capacity()) * super::week::DAYS_PER_WEEK as u32
    }

    /// Whether an hour block `[start_hour, end_hour)` lies within the window.
    pub fn contains_block(&self, start_hour: u8, end_hour: u8) -> bool {
        start_hour >= self.start && end_hour <= self.end && end_hour > start_hour
    }

    /// `HH:00` label for the start of the window.
    pub fn start_label(&self) -> String {
        clock_label(self.start)
    }

    /// `HH:00` label for the end of the window.
    pub fn end_label(&self) -> String {
        clock_label(self.end)
    }
}

impl Default for WorkingHours {
    /// The 09:00–18:00 window the dashboard starts with.
    fn default() -> Self {
        Self { start: 9, end: 18 }
    }
}

/// Renders an hour of day as a `HH:00` label.
pub fn clock_label(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// Extracts the hour component of a `HH:MM` clock string.
fn parse_hour(clock: &str) -> Option<u8> {
    let hour_part = clock.split(':').next()?;
    let hour: u8 = hour_part.trim().parse().ok()?;
    (hour <= 23).then_some(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let hours = WorkingHours::new(9, 18);
        assert!(hours.is_valid());
        assert_eq!(hours.daily_capacity(), 9);
        assert_eq!(hours.week_capacity(), 63);
    }

    #[test]
    fn test_invalid_windows() {
        assert!(!WorkingHours::new(18, 9).is_valid());
        assert!(!WorkingHours::new(9, 9).is_valid());
        assert_eq!(WorkingHours::new(18, 9).daily_capacity(), 0);
    }

    #[test]
    fn test_from_clock() {
        let hours = WorkingHours::from_clock("09:00", "18:00").unwrap();
        assert_eq!(hours, WorkingHours::new(9, 18));

        // Minutes are ignored; only the hour counts.
        let rounded = WorkingHours::from_clock("09:30", "17:45").unwrap();
        assert_eq!(rounded, WorkingHours::new(9, 17));

        assert!(WorkingHours::from_clock("25:00", "18:00").is_none());
        assert!(WorkingHours::from_clock("nine", "18:00").is_none());
        assert!(WorkingHours::from_clock("", "18:00").is_none());
    }

    #[test]
    fn test_contains_block() {
        let hours = WorkingHours::new(9, 18);
        assert!(hours.contains_block(9, 13));
        assert!(hours.contains_block(13, 18)); // flush against the end
        assert!(!hours.contains_block(8, 10));
        assert!(!hours.contains_block(16, 19));
        assert!(!hours.contains_block(10, 10)); // empty block
    }

    #[test]
    fn test_labels() {
        let hours = WorkingHours::new(9, 18);
        assert_eq!(hours.start_label(), "09:00");
        assert_eq!(hours.end_label(), "18:00");
        assert_eq!(clock_label(0), "00:00");
        assert_eq!(clock_label(13), "13:00");
    }

    #[test]
    fn test_default_window() {
        assert_eq!(WorkingHours::default(), WorkingHours::new(9, 18));
    }
}
