//! Weekly task scheduling core.
//!
//! Records tasks (title, deadline, estimated effort, priority) and
//! deterministically places each pending task onto a Monday-first weekly
//! calendar of non-overlapping hour blocks within a configured daily
//! working-hours window.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `NewTask`, `Priority`,
//!   `TaskStatus`, `Weekday`, `WorkingHours`, `Placement`, `WeekSchedule`
//! - **`scheduler`**: The pure first-fit packer and schedule summary metrics
//! - **`session`**: `SchedulingSession` orchestration, run outcomes, errors
//! - **`validation`**: Input integrity checks (title, effort range, duplicate ids)
//!
//! # Architecture
//!
//! The packer (`scheduler::first_fit::pack`) is a leaf: a pure function
//! from an ordered task slice and a window to placements plus unplaced
//! ids. The session owns all mutable state and drives status transitions;
//! UI, persistence, and notification concerns live entirely outside this
//! crate and interact through the session's operations.
//!
//! Tasks are packed strictly in submission order. Priority and deadline
//! are carried but never consulted by placement — a deliberate trade of
//! optimality for simplicity and determinism.

pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;

pub use models::{
    NewTask, Placement, Priority, Task, TaskId, TaskStatus, WeekSchedule, Weekday, WorkingHours,
};
pub use scheduler::{pack, PackingResult, ScheduleSummary};
pub use session::{RunOutcome, SchedulingSession, SessionError};
