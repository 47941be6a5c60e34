//! Greedy first-fit weekly packer.
//!
//! # Algorithm
//!
//! 1. Keep a cursor: current day (Monday-first) and current hour
//!    (reset to the window start whenever a new day begins).
//! 2. For each task, in input order:
//!    - an estimate larger than the daily capacity can never fit; the
//!      task is reported unplaced and the cursor does not move,
//!    - if the block does not fit in the remainder of the current day,
//!      advance to the next day and reset the hour,
//!    - past Sunday the week is exhausted; this and all remaining tasks
//!      are reported unplaced,
//!    - otherwise emit a placement and advance the hour past the block.
//! 3. Input order is preserved; no reordering by priority, deadline, or
//!    duration.
//!
//! Unplaced tasks are a normal outcome, not an error; the packer never
//! fails for well-formed input and is referentially transparent.
//!
//! # Complexity
//! O(n) over the number of tasks.
//!
//! # Reference
//! Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin
//! Packing: A Survey" (first-fit family)

use crate::models::{Placement, Task, TaskId, WeekSchedule, Weekday, WorkingHours, DAYS_PER_WEEK};

/// Outcome of one packing run.
///
/// Every input task id appears in exactly one of the two sequences, in
/// its input-relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackingResult {
    /// One placement per successfully placed task.
    pub placements: Vec<Placement>,
    /// Ids of tasks that received no placement.
    pub unplaced: Vec<TaskId>,
}

impl PackingResult {
    /// Number of placed tasks.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of unplaced tasks.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Consumes the result into a [`WeekSchedule`].
    pub fn into_schedule(self) -> WeekSchedule {
        WeekSchedule {
            placements: self.placements,
        }
    }
}

/// Packs tasks into the weekly calendar, first-fit in input order.
///
/// Pure and deterministic: identical input yields identical output, and
/// no task or external state is touched. Tasks whose estimate exceeds the
/// daily capacity, and tasks beyond the week's total capacity, come back
/// in `unplaced`.
///
/// # Example
///
/// ```
/// use task_time::models::{Task, WorkingHours};
/// use task_time::scheduler::first_fit;
///
/// let tasks = vec![
///     Task::new("T1", "Build backend APIs").with_estimated_hours(4),
///     Task::new("T2", "Write docs").with_estimated_hours(5),
/// ];
/// let result = first_fit::pack(&tasks, &WorkingHours::new(9, 18));
/// assert_eq!(result.placed_count(), 2);
/// assert!(result.unplaced.is_empty());
/// ```
pub fn pack(tasks: &[Task], hours: &WorkingHours) -> PackingResult {
    let mut result = PackingResult::default();
    let capacity = hours.daily_capacity();

    let mut current_day: usize = 0;
    let mut current_hour: u8 = hours.start;
    let mut week_exhausted = false;

    for task in tasks {
        if week_exhausted {
            result.unplaced.push(task.id.clone());
            continue;
        }

        // Can never fit on any day; the cursor stays put.
        if task.estimated_hours > capacity {
            result.unplaced.push(task.id.clone());
            continue;
        }

        if current_hour + task.estimated_hours > hours.end {
            current_day += 1;
            current_hour = hours.start;
        }

        if current_day >= DAYS_PER_WEEK {
            week_exhausted = true;
            result.unplaced.push(task.id.clone());
            continue;
        }

        let day = Weekday::ALL[current_day];
        let end_hour = current_hour + task.estimated_hours;
        result
            .placements
            .push(Placement::new(task.id.clone(), day, current_hour, end_hour));
        current_hour = end_hour;
    }

    result
}
