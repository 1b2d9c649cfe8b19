use clap::{Parser, Subcommand};
use crate::cli::commands_finance::handle_finance;
use crate::cli::commands_shelf::handle_shelf;
use crate::cli::commands_tasks::handle_tasks;
use crate::finance::InterestKind;
use anyhow::Result;

#[derive(Parser)]
#[command(name = "poe")]
#[command(about = "Portfolio of Evidence - task manager, bookstore inventory and finance calculators")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task manager: users, task assignment and reports
    Tasks {
        /// Username to log in as
        #[arg(short = 'u', long)]
        user: String,
        /// Password for the user
        #[arg(short = 'p', long)]
        password: String,
        #[command(subcommand)]
        subcommand: TaskCommands,
    },
    /// Bookstore inventory backed by SQLite
    Shelf {
        #[command(subcommand)]
        subcommand: ShelfCommands,
    },
    /// Investment and bond repayment calculators
    Finance {
        #[command(subcommand)]
        subcommand: FinanceCommands,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Register a new user (admin only)
    Register {
        /// New username
        username: String,
        /// New password
        password: String,
        /// Password confirmation (must match)
        confirm: String,
    },
    /// Assign a new task to a user
    Add {
        /// Username the task is assigned to
        assignee: String,
        /// Task title
        title: String,
        /// Task description
        description: String,
        /// Due date (e.g. "25 Oct 2024")
        #[arg(long)]
        due: String,
        /// Record the task as already completed
        #[arg(long)]
        completed: bool,
    },
    /// View all tasks
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// View tasks assigned to you
    Mine {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Mark one of your tasks as complete
    Complete {
        /// Task number as shown by `mine`
        number: String,
    },
    /// Reassign or reschedule one of your tasks
    Edit {
        /// Task number as shown by `mine`
        number: String,
        /// New assignee
        #[arg(long)]
        assign: Option<String>,
        /// New due date (e.g. "25 Oct 2024")
        #[arg(long)]
        due: Option<String>,
    },
    /// View completed tasks
    Completed {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Delete a task (admin only)
    Delete {
        /// Task number as shown by `list`
        number: String,
        /// Delete without confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Generate task_overview.txt and user_overview.txt (admin only)
    Report,
    /// Display report statistics (admin only)
    Stats {
        /// Output computed statistics in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ShelfCommands {
    /// Add a new book
    Add {
        /// Four-digit book ID
        book_id: String,
        /// Book title
        title: String,
        /// Quantity in stock
        #[arg(allow_negative_numbers = true)]
        qty: i64,
        /// Four-digit author ID
        author_id: String,
        /// Name for a new author (required when the author does not exist)
        #[arg(long)]
        author_name: Option<String>,
        /// Country for a new author (required when the author does not exist)
        #[arg(long)]
        author_country: Option<String>,
    },
    /// Update a book or its author's details
    Update {
        /// Four-digit book ID
        book_id: String,
        /// New quantity in stock
        #[arg(long, allow_negative_numbers = true)]
        qty: Option<i64>,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New author name
        #[arg(long)]
        author_name: Option<String>,
        /// New author country
        #[arg(long)]
        author_country: Option<String>,
    },
    /// Delete a book
    Delete {
        /// Four-digit book ID
        book_id: String,
        /// Delete without confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Search books by ID or title keyword
    Search {
        /// Four-digit book ID
        #[arg(long, conflicts_with = "title", required_unless_present = "title")]
        id: Option<String>,
        /// Keyword contained in the title (case-insensitive)
        #[arg(long)]
        title: Option<String>,
    },
    /// View details of all books
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show details of one book
    Show {
        /// Four-digit book ID
        book_id: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum FinanceCommands {
    /// Value of an investment after a number of years
    Investment {
        /// Amount deposited
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        /// Annual interest rate as a percentage
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        /// Number of years invested
        #[arg(long)]
        years: u32,
        /// Interest model
        #[arg(long, value_enum)]
        interest: InterestKind,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Monthly repayment on a home loan
    Bond {
        /// Present value of the house
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        /// Annual interest rate as a percentage
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        /// Number of months to repay over
        #[arg(long)]
        months: u32,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Prints help/version with exit 0, usage errors with exit 2
        Err(e) => e.exit(),
    };

    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Tasks { user, password, subcommand } => handle_tasks(&user, &password, subcommand),
        Commands::Shelf { subcommand } => handle_shelf(subcommand),
        Commands::Finance { subcommand } => handle_finance(subcommand),
    }
}

/// Ask a yes/no question on stdout; anything but y/yes is a no
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tasks_login_before_subcommand() {
        let cli = Cli::try_parse_from(["poe", "tasks", "-u", "admin", "-p", "adm1n", "list"]).unwrap();
        match cli.command {
            Commands::Tasks { user, subcommand: TaskCommands::List { json }, .. } => {
                assert_eq!(user, "admin");
                assert!(!json);
            }
            _ => panic!("expected tasks list"),
        }
    }

    #[test]
    fn test_search_requires_id_or_title() {
        assert!(Cli::try_parse_from(["poe", "shelf", "search"]).is_err());
        assert!(Cli::try_parse_from(["poe", "shelf", "search", "--id", "3001", "--title", "x"]).is_err());
        assert!(Cli::try_parse_from(["poe", "shelf", "search", "--title", "lord"]).is_ok());
    }

    #[test]
    fn test_finance_interest_value_enum() {
        let cli = Cli::try_parse_from([
            "poe", "finance", "investment", "--amount", "1000", "--rate", "5", "--years", "3", "--interest", "compound",
        ]).unwrap();
        match cli.command {
            Commands::Finance { subcommand: FinanceCommands::Investment { interest, .. } } => {
                assert_eq!(interest, InterestKind::Compound);
            }
            _ => panic!("expected finance investment"),
        }
        assert!(Cli::try_parse_from([
            "poe", "finance", "investment", "--amount", "1", "--rate", "1", "--years", "1", "--interest", "weekly",
        ]).is_err());
    }
}
