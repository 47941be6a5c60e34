//! Scheduling session orchestration.
//!
//! The session owns the task collection, the current week schedule, and
//! the configured working hours, and drives one scheduling run end to
//! end: select pending tasks, invoke the packer, apply status
//! transitions, report the outcome. Collaborators (forms, dialogs,
//! rendering, persistence) interact only through the operations here.

use serde::{Deserialize, Serialize};

use crate::models::{NewTask, Task, TaskId, TaskStatus, WeekSchedule, WorkingHours};
use crate::scheduler::first_fit;
use crate::validation::{validate_new_task, validate_tasks, ValidationError};

/// Report of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The run produced a schedule. Unplaced tasks stay pending for a
    /// future run; partial overflow is not a failure.
    Completed {
        /// Number of tasks placed.
        placed: usize,
        /// Ids of eligible tasks that received no placement.
        unplaced: Vec<TaskId>,
    },
    /// No pending tasks existed; nothing was mutated.
    NothingToSchedule,
}

/// Errors surfaced by session operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Working-hours precondition failed (`end <= start`); no run occurs.
    InvalidWorkingHours { start: u8, end: u8 },
    /// A task draft failed validation and was not admitted.
    InvalidTask(Vec<ValidationError>),
}

/// Owns the task collection and current schedule; serializes scheduling
/// runs (one logical run in flight at a time, synchronous).
#[derive(Debug, Clone)]
pub struct SchedulingSession {
    tasks: Vec<Task>,
    schedule: WeekSchedule,
    working_hours: WorkingHours,
    next_id: u64,
}

impl SchedulingSession {
    /// Creates an empty session with the default 09:00–18:00 window.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            schedule: WeekSchedule::new(),
            working_hours: WorkingHours::default(),
            next_id: 1,
        }
    }

    /// Creates a session over an existing task collection (e.g., restored
    /// by a persistence collaborator).
    ///
    /// The schedule itself is not persisted, so restored `Scheduled`
    /// tasks are demoted to `Pending`: a task is `Scheduled` iff a
    /// placement for it exists.
    pub fn with_tasks(mut tasks: Vec<Task>) -> Result<Self, Vec<ValidationError>> {
        validate_tasks(&tasks)?;
        for task in &mut tasks {
            if task.status == TaskStatus::Scheduled {
                task.status = TaskStatus::Pending;
            }
        }
        let next_id = tasks
            .iter()
            .filter_map(|t| t.id.strip_prefix('T')?.parse::<u64>().ok())
            .max()
            .map_or(1, |n| n + 1);
        Ok(Self {
            tasks,
            schedule: WeekSchedule::new(),
            working_hours: WorkingHours::default(),
            next_id,
        })
    }

    /// Sets the working-hours window as supplied by the collaborator,
    /// without validating it; the precondition is checked when a run is
    /// requested.
    pub fn with_working_hours(mut self, hours: WorkingHours) -> Self {
        self.working_hours = hours;
        self
    }

    /// The task collection, in submission order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// The current week schedule.
    pub fn schedule(&self) -> &WeekSchedule {
        &self.schedule
    }

    /// The configured working hours.
    pub fn working_hours(&self) -> &WorkingHours {
        &self.working_hours
    }

    /// Number of tasks eligible for the next run.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_pending()).count()
    }

    /// Replaces the working-hours window.
    ///
    /// Rejects `end <= start` without touching the current window.
    pub fn set_working_hours(&mut self, hours: WorkingHours) -> Result<(), SessionError> {
        if !hours.is_valid() {
            return Err(SessionError::InvalidWorkingHours {
                start: hours.start,
                end: hours.end,
            });
        }
        self.working_hours = hours;
        Ok(())
    }

    /// Validates a draft, assigns an id, and admits it as a pending task.
    ///
    /// Returns the assigned id.
    pub fn add_task(&mut self, draft: NewTask) -> Result<TaskId, SessionError> {
        validate_new_task(&draft).map_err(SessionError::InvalidTask)?;

        let id = format!("T{}", self.next_id);
        self.next_id += 1;

        self.tasks.push(
            Task::new(id.clone(), draft.title)
                .with_deadline(draft.deadline)
                .with_estimated_hours(draft.estimated_hours)
                .with_priority(draft.priority),
        );
        Ok(id)
    }

    /// Removes a task and any placement referencing it. Other placements
    /// keep their slots. Returns whether the task existed.
    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        let removed = self.tasks.len() < before;
        if removed {
            self.schedule.remove_task(task_id);
        }
        removed
    }

    /// Marks a task completed on behalf of the completion collaborator.
    ///
    /// `Completed` is terminal; the task's placement (if any) is removed
    /// so that a task is `Scheduled` iff it is placed. Returns whether
    /// the task existed.
    pub fn mark_completed(&mut self, task_id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.status = TaskStatus::Completed;
                self.schedule.remove_task(task_id);
                true
            }
            None => false,
        }
    }

    /// Runs one scheduling pass over the currently pending tasks.
    ///
    /// Steps:
    /// 1. Snapshot the pending tasks in their existing order. An empty
    ///    snapshot reports [`RunOutcome::NothingToSchedule`] and mutates
    ///    nothing.
    /// 2. Invoke the first-fit packer.
    /// 3. Placed tasks transition `Pending -> Scheduled`; unplaced tasks
    ///    stay pending. Placements of the tasks just processed are
    ///    replaced; placements of previously scheduled tasks are left
    ///    untouched (already-scheduled tasks are never reconsidered).
    ///
    /// An invalid working-hours window is rejected before any of this.
    pub fn run_schedule(&mut self) -> Result<RunOutcome, SessionError> {
        if !self.working_hours.is_valid() {
            return Err(SessionError::InvalidWorkingHours {
                start: self.working_hours.start,
                end: self.working_hours.end,
            });
        }

        // Stable snapshot of the eligible set; tasks added or deleted
        // afterwards are not part of this run.
        let eligible: Vec<Task> = self.tasks.iter().filter(|t| t.is_pending()).cloned().collect();
        if eligible.is_empty() {
            return Ok(RunOutcome::NothingToSchedule);
        }

        let result = first_fit::pack(&eligible, &self.working_hours);

        for t in &eligible {
            self.schedule.remove_task(&t.id);
        }
        for placement in &result.placements {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == placement.task_id) {
                task.status = TaskStatus::Scheduled;
            }
            self.schedule.add(placement.clone());
        }

        Ok(RunOutcome::Completed {
            placed: result.placed_count(),
            unplaced: result.unplaced,
        })
    }
}

impl Default for SchedulingSession {
    fn default() -> Self {
        Self::new()
    }
}
