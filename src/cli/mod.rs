pub mod commands;
pub mod commands_tasks;
pub mod commands_shelf;
pub mod commands_finance;
pub mod error;
pub mod output;

pub use commands::*;
pub use output::*;
pub use error::*;
