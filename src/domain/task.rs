use super::enums::Priority;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user-created to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier derived from creation time; sole identity for
    /// mutation and removal
    pub id: String,
    /// Task name
    pub name: String,
    /// Due date (YYYY-MM-DD)
    pub deadline: NaiveDate,
    /// Priority level
    pub priority: Priority,
    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Local>,
}

/// Raw task-form fields as typed by the user
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    pub name: String,
    pub deadline: String,
    pub priority: Option<Priority>,
}

/// Reasons a task submission is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Deadline must be a valid date (YYYY-MM-DD)")]
    InvalidDeadline,
    #[error("Deadline must be today or a future date")]
    PastDeadline,
    #[error("Task with same name and deadline already exists")]
    Duplicate,
}

/// Validate a task submission against the existing list.
///
/// `today` is the local calendar date at submission time; same-day deadlines
/// are accepted. Duplicates match on case-insensitive name plus identical
/// deadline, regardless of priority.
pub fn validate_new_task(
    existing: &[Task],
    input: &TaskInput,
    today: NaiveDate,
) -> Result<Task, TaskError> {
    let name = input.name.trim();
    let deadline_raw = input.deadline.trim();

    let priority = match input.priority {
        Some(p) if !name.is_empty() && !deadline_raw.is_empty() => p,
        _ => return Err(TaskError::MissingFields),
    };

    let deadline = NaiveDate::parse_from_str(deadline_raw, "%Y-%m-%d")
        .map_err(|_| TaskError::InvalidDeadline)?;

    if deadline < today {
        return Err(TaskError::PastDeadline);
    }

    let duplicate = existing
        .iter()
        .any(|t| t.name.to_lowercase() == name.to_lowercase() && t.deadline == deadline);
    if duplicate {
        return Err(TaskError::Duplicate);
    }

    Ok(Task {
        id: fresh_id(existing),
        name: name.to_string(),
        deadline,
        priority,
        completed: false,
        created_at: Local::now(),
    })
}

/// Derive a fresh id from the current time, bumping past collisions
fn fresh_id(existing: &[Task]) -> String {
    let mut millis = Local::now().timestamp_millis();
    loop {
        let id = millis.to_string();
        if !existing.iter().any(|t| t.id == id) {
            return id;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(name: &str, deadline: &str, priority: Priority) -> TaskInput {
        TaskInput {
            name: name.to_string(),
            deadline: deadline.to_string(),
            priority: Some(priority),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_task_created() {
        let task =
            validate_new_task(&[], &input("Buy milk", "2099-01-01", Priority::High), today())
                .unwrap();
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.deadline, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut blank_name = input("  ", "2099-01-01", Priority::Low);
        assert_eq!(
            validate_new_task(&[], &blank_name, today()),
            Err(TaskError::MissingFields)
        );

        blank_name = input("Task", "", Priority::Low);
        assert_eq!(
            validate_new_task(&[], &blank_name, today()),
            Err(TaskError::MissingFields)
        );

        let no_priority = TaskInput {
            name: "Task".to_string(),
            deadline: "2099-01-01".to_string(),
            priority: None,
        };
        assert_eq!(
            validate_new_task(&[], &no_priority, today()),
            Err(TaskError::MissingFields)
        );
    }

    #[test]
    fn test_malformed_deadline_rejected() {
        assert_eq!(
            validate_new_task(&[], &input("Task", "next tuesday", Priority::Low), today()),
            Err(TaskError::InvalidDeadline)
        );
    }

    #[test]
    fn test_past_deadline_rejected_same_day_accepted() {
        assert_eq!(
            validate_new_task(&[], &input("Task", "2025-06-14", Priority::Low), today()),
            Err(TaskError::PastDeadline)
        );

        // Same-day deadline is valid
        let task =
            validate_new_task(&[], &input("Task", "2025-06-15", Priority::Low), today()).unwrap();
        assert_eq!(task.deadline, today());
    }

    #[test]
    fn test_duplicate_rejected_regardless_of_priority() {
        let first =
            validate_new_task(&[], &input("Buy milk", "2099-01-01", Priority::High), today())
                .unwrap();
        let existing = vec![first];

        // Same name and deadline with a different priority is still a duplicate
        assert_eq!(
            validate_new_task(
                &existing,
                &input("Buy milk", "2099-01-01", Priority::Low),
                today()
            ),
            Err(TaskError::Duplicate)
        );

        // Case-insensitive name match
        assert_eq!(
            validate_new_task(
                &existing,
                &input("BUY MILK", "2099-01-01", Priority::Medium),
                today()
            ),
            Err(TaskError::Duplicate)
        );

        // Different deadline is fine
        assert!(validate_new_task(
            &existing,
            &input("Buy milk", "2099-01-02", Priority::High),
            today()
        )
        .is_ok());
    }

    #[test]
    fn test_fresh_id_avoids_collisions() {
        let first =
            validate_new_task(&[], &input("One", "2099-01-01", Priority::Low), today()).unwrap();
        let second =
            validate_new_task(&[first.clone()], &input("Two", "2099-01-01", Priority::Low), today())
                .unwrap();
        assert_ne!(first.id, second.id);
    }
}
