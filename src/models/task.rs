//! Task model.
//!
//! A task is a single unit of work to be placed on the weekly calendar:
//! a title, a deadline, an estimated effort in whole hours, and a
//! priority. Placement consumes only the estimate; deadline and priority
//! are carried for display and future ordering strategies.
//!
//! # Time Representation
//! Effort and clock positions are whole hours. There is no sub-hour
//! granularity anywhere in the core.

use serde::{Deserialize, Serialize};

/// Opaque task identifier, assigned at creation and immutable.
pub type TaskId = String;

/// Largest effort estimate a task may carry (one full day).
pub const MAX_ESTIMATED_HOURS: u8 = 24;

/// A unit of work to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Human-readable title. Non-empty.
    pub title: String,
    /// Deadline date (`YYYY-MM-DD`). Informational; not consumed by placement.
    pub deadline: String,
    /// Effort estimate in whole hours, 1..=24.
    pub estimated_hours: u8,
    /// Scheduling priority. Informational; placement packs in submission order.
    pub priority: Priority,
    /// Lifecycle status.
    pub status: TaskStatus,
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Task lifecycle status.
///
/// `Pending` at creation. A scheduling run transitions placed tasks to
/// `Scheduled`. `Completed` is terminal and only ever set by the
/// completion collaborator, never by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Scheduled,
    Completed,
}

/// Payload supplied by the task-creation collaborator.
///
/// The session validates the draft, assigns the id, and sets the initial
/// `Pending` status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Human-readable title. Non-empty.
    pub title: String,
    /// Deadline date (`YYYY-MM-DD`).
    pub deadline: String,
    /// Effort estimate in whole hours, 1..=24.
    pub estimated_hours: u8,
    /// Scheduling priority.
    pub priority: Priority,
}

impl Task {
    /// Creates a pending task with the given id and title.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            deadline: String::new(),
            estimated_hours: 1,
            priority: Priority::Medium,
            status: TaskStatus::Pending,
        }
    }

    /// Sets the deadline date.
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = deadline.into();
        self
    }

    /// Sets the effort estimate in hours.
    pub fn with_estimated_hours(mut self, hours: u8) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this task is eligible for the next scheduling run.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }
}

impl NewTask {
    /// Creates a draft task.
    pub fn new(
        title: impl Into<String>,
        deadline: impl Into<String>,
        estimated_hours: u8,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            deadline: deadline.into(),
            estimated_hours,
            priority,
        }
    }
}
