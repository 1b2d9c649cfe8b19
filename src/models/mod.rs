// Core data models for POE
// Task manager records live in flat files; books and authors live in SQLite

pub mod task;
pub mod user;
pub mod book;

pub use task::*;
pub use user::*;
pub use book::*;
