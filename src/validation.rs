//! Input validation for tasks.
//!
//! Checks the constraints the task-creation collaborator must uphold
//! before a task reaches the scheduler:
//! - Non-empty title
//! - Effort estimate within 1..=24 hours
//! - Unique task ids (for bulk-loaded collections)
//!
//! All detected issues are accumulated and returned together.

use crate::models::{NewTask, Task, MAX_ESTIMATED_HOURS};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Effort estimate outside 1..=24 hours.
    HoursOutOfRange,
    /// Two tasks share the same id.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task draft before it is admitted to the collection.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_new_task(draft: &NewTask) -> ValidationResult {
    let mut errors = Vec::new();
    check_fields(&draft.title, draft.estimated_hours, "draft task", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a full task collection (e.g., restored by a persistence
/// collaborator): per-task field checks plus id uniqueness.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for task in tasks {
        if !ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task id: {}", task.id),
            ));
        }
        check_fields(
            &task.title,
            task.estimated_hours,
            &format!("task '{}'", task.id),
            &mut errors,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_fields(title: &str, estimated_hours: u8, subject: &str, errors: &mut Vec<ValidationError>) {
    if title.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTitle,
            format!("{subject} has an empty title"),
        ));
    }

    if estimated_hours == 0 || estimated_hours > MAX_ESTIMATED_HOURS {
        errors.push(ValidationError::new(
            ValidationErrorKind::HoursOutOfRange,
            format!(
                "{subject} estimates {estimated_hours}h; allowed range is 1..={MAX_ESTIMATED_HOURS}"
            ),
        ));
    }
}
