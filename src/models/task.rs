use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::utils::date::{format_task_date, parse_task_date};

/// Field separator used in `tasks.txt` and `user.txt`
pub const FIELD_SEPARATOR: &str = ", ";

/// Why a `tasks.txt` line could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskLineError {
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid date '{0}'")]
    InvalidDate(String),
}

/// Task model
///
/// Stored as one line of `tasks.txt`:
///
/// ```text
/// admin, Register users, Add the new starters, 10 Oct 2024, 25 Oct 2024, No
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub assignee: String,
    pub title: String,
    pub description: String,
    pub assigned_date: NaiveDate,
    pub due_date: NaiveDate,
    pub completed: bool,
}

impl TaskRecord {
    /// Create a new, uncompleted task assigned today
    pub fn new(assignee: String, title: String, description: String, due_date: NaiveDate) -> Self {
        Self {
            assignee,
            title,
            description,
            assigned_date: chrono::Local::now().date_naive(),
            due_date,
            completed: false,
        }
    }

    /// Parse a `tasks.txt` line
    pub fn from_line(line: &str) -> Result<Self, TaskLineError> {
        let parts: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
        if parts.len() != 6 {
            return Err(TaskLineError::FieldCount(parts.len()));
        }

        let date = |field: &str| {
            parse_task_date(field).map_err(|_| TaskLineError::InvalidDate(field.trim().to_string()))
        };
        let assigned_date = date(parts[3])?;
        let due_date = date(parts[4])?;

        Ok(Self {
            assignee: parts[0].to_string(),
            title: parts[1].to_string(),
            description: parts[2].to_string(),
            assigned_date,
            due_date,
            completed: parts[5].eq_ignore_ascii_case("yes"),
        })
    }

    /// Render as a `tasks.txt` line (without trailing newline)
    pub fn to_line(&self) -> String {
        let assigned = format_task_date(self.assigned_date);
        let due = format_task_date(self.due_date);
        [
            self.assignee.as_str(),
            self.title.as_str(),
            self.description.as_str(),
            assigned.as_str(),
            due.as_str(),
            self.completed_label(),
        ]
        .join(FIELD_SEPARATOR)
    }

    pub fn completed_label(&self) -> &'static str {
        if self.completed { "Yes" } else { "No" }
    }

    /// Check if the task is overdue on the given day
    /// A task due today is not overdue yet.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}
