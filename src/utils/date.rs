// Date handling for task records ("25 Oct 2024")

use chrono::NaiveDate;
use anyhow::Result;

/// Format used for assigned and due dates in `tasks.txt`
pub const TASK_DATE_FORMAT: &str = "%d %b %Y";

/// Parse a `DD Mon YYYY` date (e.g. "25 Oct 2024"); month names are case-insensitive
pub fn parse_task_date(expr: &str) -> Result<NaiveDate> {
    let expr = expr.trim();
    NaiveDate::parse_from_str(expr, TASK_DATE_FORMAT)
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Use 'DD Mon YYYY' (e.g. 25 Oct 2024).", expr))
}

/// Format a date as `DD Mon YYYY`
pub fn format_task_date(date: NaiveDate) -> String {
    date.format(TASK_DATE_FORMAT).to_string()
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
