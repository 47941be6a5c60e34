//! Scheduling domain models.
//!
//! Core data types for the weekly task scheduler: tasks and their
//! lifecycle, the daily working-hours window, weekdays, and the
//! placements that make up a week schedule.
//!
//! All types serialize with serde using the wire shapes the surrounding
//! app exchanges: lowercase `status`/`priority` values and capitalized
//! day names.

mod placement;
mod task;
mod week;
mod working_hours;

pub use placement::{Placement, WeekSchedule};
pub use task::{NewTask, Priority, Task, TaskId, TaskStatus, MAX_ESTIMATED_HOURS};
pub use week::{Weekday, DAYS_PER_WEEK};
pub use working_hours::{clock_label, WorkingHours};
