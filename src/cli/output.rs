// Output formatting utilities

use crate::models::{BookDetails, TaskRecord};
use crate::utils::format_task_date;

/// Widest separator rule printed between listing entries
const MAX_RULE_WIDTH: usize = 50;

/// Terminal width, or None when stdout is not a terminal
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
}

/// Horizontal rule sized to the terminal (at most 50 columns)
pub fn rule() -> String {
    let width = terminal_width()
        .filter(|w| *w > 0)
        .map(|w| w.min(MAX_RULE_WIDTH))
        .unwrap_or(MAX_RULE_WIDTH);
    "-".repeat(width)
}

/// Full task block as shown by `tasks list`
pub fn format_task_block(task: &TaskRecord, number: usize) -> String {
    format!(
        "Task {}: {}\n\
         Assigned to: {}\n\
         Date Assigned: {}\n\
         Due Date: {}\n\
         Task Complete? {}\n\
         Description:\n  {}\n",
        number,
        task.title,
        task.assignee,
        format_task_date(task.assigned_date),
        format_task_date(task.due_date),
        task.completed_label(),
        task.description,
    )
}

/// Task block without completion status, as shown by `tasks completed`
pub fn format_completed_block(task: &TaskRecord) -> String {
    format!(
        "Task: {}\n\
         Assigned to: {}\n\
         Date Assigned: {}\n\
         Due Date: {}\n\
         Description:\n  {}\n",
        task.title,
        task.assignee,
        format_task_date(task.assigned_date),
        format_task_date(task.due_date),
        task.description,
    )
}

/// One numbered line of `tasks mine`
pub fn format_task_line(task: &TaskRecord, number: usize) -> String {
    format!(
        "{}: Task: {}, Due: {}, Completed: {}",
        number,
        task.title,
        format_task_date(task.due_date),
        task.completed_label(),
    )
}

/// Labelled book details for listings and `shelf show`
pub fn format_book_details(book: &BookDetails) -> String {
    format!(
        "Book ID         : {}\n\
         Title           : {}\n\
         Author          : {}\n\
         Country         : {}\n\
         In stock        : {}",
        book.id,
        book.title,
        book.author.name,
        book.author.country,
        book.qty,
    )
}

/// One line of a keyword search result
pub fn format_book_match(book: &BookDetails) -> String {
    format!("* {} — {} ({})", book.title, book.author.name, book.author.country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;
    use chrono::NaiveDate;

    fn sample_task() -> TaskRecord {
        TaskRecord {
            assignee: "sam".to_string(),
            title: "Paint fence".to_string(),
            description: "Two coats".to_string(),
            assigned_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 10, 25).unwrap(),
            completed: false,
        }
    }

    #[test]
    fn test_format_task_line() {
        assert_eq!(
            format_task_line(&sample_task(), 2),
            "2: Task: Paint fence, Due: 25 Oct 2024, Completed: No"
        );
    }

    #[test]
    fn test_format_task_block() {
        let block = format_task_block(&sample_task(), 1);
        assert!(block.starts_with("Task 1: Paint fence\nAssigned to: sam\n"));
        assert!(block.contains("Date Assigned: 01 Oct 2024\n"));
        assert!(block.contains("Task Complete? No\n"));
    }

    #[test]
    fn test_format_completed_block_omits_status() {
        let block = format_completed_block(&sample_task());
        assert!(!block.contains("Task Complete?"));
        assert!(block.contains("Due Date: 25 Oct 2024"));
    }

    #[test]
    fn test_rule_width() {
        let rule = rule();
        assert!(!rule.is_empty());
        assert!(rule.len() <= MAX_RULE_WIDTH);
    }

    #[test]
    fn test_format_book_match() {
        let book = BookDetails {
            id: 3004,
            title: "The Lord of the Rings".to_string(),
            qty: 37,
            author: Author { id: 6380, name: "J.R.R. Tolkien".to_string(), country: "South Africa".to_string() },
        };
        assert_eq!(format_book_match(&book), "* The Lord of the Rings — J.R.R. Tolkien (South Africa)");
        assert!(format_book_details(&book).contains("In stock        : 37"));
    }
}
