pub mod date;
pub mod fuzzy;
pub mod money;

pub use date::{parse_task_date, format_task_date, today};
pub use money::format_thousands;
