use chrono::NaiveDate;
use serde::Serialize;
use crate::models::{TaskRecord, User};

/// Whole-file task statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskOverview {
    pub total: usize,
    pub completed: usize,
    pub uncompleted: usize,
    pub overdue: usize,
    pub pct_incomplete: f64,
    pub pct_overdue: f64,
}

/// Per-user task statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub username: String,
    pub total: usize,
    pub pct_of_all_tasks: f64,
    pub pct_completed: f64,
    pub pct_uncompleted: f64,
    pub pct_overdue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserOverview {
    pub total_users: usize,
    pub total_tasks: usize,
    pub users: Vec<UserStats>,
}

/// Percentage of part in whole; 0 when whole is 0
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl TaskOverview {
    pub fn compute(tasks: &[TaskRecord], today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue_on(today)).count();
        let uncompleted = total - completed;

        Self {
            total,
            completed,
            uncompleted,
            overdue,
            pct_incomplete: percent(uncompleted, total),
            pct_overdue: percent(overdue, total),
        }
    }

    /// Render as the contents of `task_overview.txt`
    pub fn render(&self) -> String {
        format!(
            "Total tasks: {}\n\
             Completed tasks: {}\n\
             Uncompleted tasks: {}\n\
             Overdue tasks: {}\n\
             Percentage incomplete: {:.2}%\n\
             Percentage overdue: {:.2}%\n",
            self.total,
            self.completed,
            self.uncompleted,
            self.overdue,
            self.pct_incomplete,
            self.pct_overdue,
        )
    }
}

impl UserOverview {
    /// Compute statistics for every user, in user file order
    pub fn compute(users: &[User], tasks: &[TaskRecord], today: NaiveDate) -> Self {
        let total_tasks = tasks.len();

        let users = users.iter().map(|user| {
            let mine: Vec<&TaskRecord> = tasks.iter()
                .filter(|t| t.assignee == user.username)
                .collect();
            let total = mine.len();
            let completed = mine.iter().filter(|t| t.completed).count();
            let overdue = mine.iter().filter(|t| t.is_overdue_on(today)).count();

            UserStats {
                username: user.username.clone(),
                total,
                pct_of_all_tasks: percent(total, total_tasks),
                pct_completed: percent(completed, total),
                pct_uncompleted: percent(total - completed, total),
                pct_overdue: percent(overdue, total),
            }
        }).collect::<Vec<_>>();

        Self {
            total_users: users.len(),
            total_tasks,
            users,
        }
    }

    /// Render as the contents of `user_overview.txt`
    pub fn render(&self) -> String {
        let mut out = format!("Total users: {}\nTotal tasks: {}\n\n", self.total_users, self.total_tasks);
        for stats in &self.users {
            out.push_str(&format!("User: {}\n", stats.username));
            out.push_str(&format!("  Total tasks assigned: {}\n", stats.total));
            out.push_str(&format!("  Percentage of total tasks assigned: {:.2}%\n", stats.pct_of_all_tasks));
            out.push_str(&format!("  Percentage completed: {:.2}%\n", stats.pct_completed));
            out.push_str(&format!("  Percentage uncompleted: {:.2}%\n", stats.pct_uncompleted));
            out.push_str(&format!("  Percentage overdue: {:.2}%\n\n", stats.pct_overdue));
        }
        out
    }
}
