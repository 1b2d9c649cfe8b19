//! POE (Portfolio of Evidence) - a command-line toolkit bundling independent capstone exercises
//!
//! This library provides the core functionality for POE, including:
//! - Configuration lookup for data locations
//! - A file-based task manager with users, assignments and reports
//! - A SQLite bookstore inventory with schema migrations
//! - Investment and bond repayment calculators
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```no_run
//! use poe::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod config;
pub mod db;
pub mod models;
pub mod repo;
pub mod report;
pub mod finance;
pub mod cli;
pub mod utils;
