//! Placement (scheduled task) and week-schedule models.
//!
//! A placement assigns one task to a weekday and an hour block; the week
//! schedule is the full set of placements produced by scheduling runs.
//! Placements reference tasks by id only — deleting a task removes its
//! placement without touching any other.

use serde::{Deserialize, Serialize};

use super::week::Weekday;
use super::working_hours::clock_label;
use super::TaskId;

/// Assignment of one task to a day and hour block.
///
/// The block is half-open: `[start_hour, end_hour)`, with
/// `end_hour - start_hour` equal to the task's estimated hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Id of the placed task (weak reference, not ownership).
    pub task_id: TaskId,
    /// Day the block is placed on.
    pub day: Weekday,
    /// First hour of the block (inclusive).
    pub start_hour: u8,
    /// End of the block (exclusive).
    pub end_hour: u8,
}

impl Placement {
    /// Creates a placement.
    pub fn new(task_id: impl Into<TaskId>, day: Weekday, start_hour: u8, end_hour: u8) -> Self {
        Self {
            task_id: task_id.into(),
            day,
            start_hour,
            end_hour,
        }
    }

    /// Block length in hours.
    #[inline]
    pub fn duration_hours(&self) -> u8 {
        self.end_hour - self.start_hour
    }

    /// `HH:00` label for the block start.
    pub fn start_time(&self) -> String {
        clock_label(self.start_hour)
    }

    /// `HH:00` label for the block end.
    pub fn end_time(&self) -> String {
        clock_label(self.end_hour)
    }

    /// Whether two placements occupy overlapping hours on the same day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start_hour < other.end_hour && other.start_hour < self.end_hour
    }
}

/// The current weekly schedule: every placement from the runs that
/// produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Placements, in the order they were produced.
    pub placements: Vec<Placement>,
}

impl WeekSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placement.
    pub fn add(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Finds the placement for a task, if any.
    pub fn placement_for_task(&self, task_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.task_id == task_id)
    }

    /// Whether a task has a placement.
    pub fn contains_task(&self, task_id: &str) -> bool {
        self.placement_for_task(task_id).is_some()
    }

    /// Returns the placements on a given day, in production order.
    pub fn placements_for_day(&self, day: Weekday) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.day == day).collect()
    }

    /// Removes any placement referencing the task. Returns whether one
    /// was removed. Other placements keep their slots.
    pub fn remove_task(&mut self, task_id: &str) -> bool {
        let before = self.placements.len();
        self.placements.retain(|p| p.task_id != task_id);
        self.placements.len() < before
    }

    /// Total placed hours on a given day.
    pub fn hours_on(&self, day: Weekday) -> u32 {
        self.placements
            .iter()
            .filter(|p| p.day == day)
            .map(|p| u32::from(p.duration_hours()))
            .sum()
    }

    /// Total placed hours across the week.
    pub fn total_hours(&self) -> u32 {
        self.placements
            .iter()
            .map(|p| u32::from(p.duration_hours()))
            .sum()
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the schedule has no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> WeekSchedule {
        let mut s = WeekSchedule::new();
        s.add(Placement::new("T1", Weekday::Monday, 9, 13));
        s.add(Placement::new("T2", Weekday::Monday, 13, 18));
        s.add(Placement::new("T3", Weekday::Tuesday, 9, 12));
        s
    }

    #[test]
    fn test_placement_block() {
        let p = Placement::new("T1", Weekday::Monday, 9, 13);
        assert_eq!(p.duration_hours(), 4);
        assert_eq!(p.start_time(), "09:00");
        assert_eq!(p.end_time(), "13:00");
    }

    #[test]
    fn test_overlap_detection() {
        let a = Placement::new("T1", Weekday::Monday, 9, 13);
        let b = Placement::new("T2", Weekday::Monday, 12, 15);
        let c = Placement::new("T3", Weekday::Monday, 13, 15); // touching, not overlapping
        let d = Placement::new("T4", Weekday::Tuesday, 9, 13); // other day

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_lookup_by_task_and_day() {
        let s = sample_schedule();
        assert_eq!(s.len(), 3);
        assert!(s.contains_task("T2"));
        assert!(!s.contains_task("T9"));

        let monday = s.placements_for_day(Weekday::Monday);
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].task_id, "T1");

        assert_eq!(s.placement_for_task("T3").unwrap().day, Weekday::Tuesday);
    }

    #[test]
    fn test_remove_task_leaves_others_in_place() {
        let mut s = sample_schedule();
        assert!(s.remove_task("T1"));
        assert!(!s.remove_task("T1")); // already gone

        // T2 keeps its original slot; nothing shifts.
        let t2 = s.placement_for_task("T2").unwrap();
        assert_eq!(t2.start_hour, 13);
        assert_eq!(t2.end_hour, 18);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_hours_accounting() {
        let s = sample_schedule();
        assert_eq!(s.hours_on(Weekday::Monday), 9);
        assert_eq!(s.hours_on(Weekday::Tuesday), 3);
        assert_eq!(s.hours_on(Weekday::Sunday), 0);
        assert_eq!(s.total_hours(), 12);
    }

    #[test]
    fn test_empty_schedule() {
        let s = WeekSchedule::new();
        assert!(s.is_empty());
        assert_eq!(s.total_hours(), 0);
        assert!(s.placement_for_task("T1").is_none());
    }
}
