// Task manager command handlers

use std::path::{Path, PathBuf};
use crate::cli::commands::{confirm, TaskCommands};
use crate::cli::error::{user_error, validate_record_field, validate_task_number};
use crate::cli::output::{format_completed_block, format_task_block, format_task_line};
use crate::config::Config;
use crate::models::{TaskRecord, User};
use crate::repo::{TaskRepo, UserRepo};
use crate::report::{self, TaskOverview, UserOverview};
use crate::utils::{fuzzy, parse_task_date, today};
use anyhow::Result;

/// Logged-in state for one task manager command
struct TaskSession {
    dir: PathBuf,
    users: Vec<User>,
    current: User,
}

impl TaskSession {
    fn require_admin(&self, action: &str) {
        if !self.current.is_admin() {
            user_error(&format!("Only admin can {}.", action));
        }
    }
}

pub fn handle_tasks(username: &str, password: &str, cmd: TaskCommands) -> Result<()> {
    let config = Config::load()?;
    let session = login(config.tasks_dir(), username, password)?;

    match cmd {
        TaskCommands::Register { username, password, confirm } => {
            handle_register(&session, username, password, confirm)
        }
        TaskCommands::Add { assignee, title, description, due, completed } => {
            handle_add(&session, assignee, title, description, due, completed)
        }
        TaskCommands::List { json } => handle_list(&session, json),
        TaskCommands::Mine { json } => handle_mine(&session, json),
        TaskCommands::Complete { number } => handle_complete(&session, &number),
        TaskCommands::Edit { number, assign, due } => handle_edit(&session, &number, assign, due),
        TaskCommands::Completed { json } => handle_completed(&session, json),
        TaskCommands::Delete { number, yes } => handle_delete(&session, &number, yes),
        TaskCommands::Report => handle_report(&session),
        TaskCommands::Stats { json } => handle_stats(&session, json),
    }
}

fn login(dir: &Path, username: &str, password: &str) -> Result<TaskSession> {
    let users = UserRepo::load(dir)?;
    let current = match UserRepo::authenticate(&users, username.trim(), password.trim()) {
        Some(user) => user.clone(),
        None => user_error("Invalid username or password."),
    };
    log::debug!("Logged in as {}", current.username);

    Ok(TaskSession {
        dir: dir.to_path_buf(),
        users,
        current,
    })
}

/// Exit with a "user does not exist" error, suggesting near matches
fn unknown_user_error(users: &[User], username: &str) -> ! {
    let matches = fuzzy::find_near_matches(username, users.iter().map(|u| u.username.as_str()), 2);
    if matches.is_empty() {
        user_error(&format!("User '{}' does not exist.", username));
    } else {
        let names: Vec<String> = matches.iter().map(|name| format!("'{}'", name)).collect();
        user_error(&format!("User '{}' does not exist. Did you mean {}?", username, names.join(", ")));
    }
}

fn handle_register(session: &TaskSession, username: String, password: String, confirm: String) -> Result<()> {
    session.require_admin("register new users");

    let username = username.trim().to_string();
    let password = password.trim().to_string();
    validate_record_field(&username, "Username")?;
    validate_record_field(&password, "Password")?;

    if UserRepo::find(&session.users, &username).is_some() {
        user_error(&format!("Username '{}' already exists.", username));
    }
    if password != confirm.trim() {
        user_error("Passwords do not match.");
    }

    UserRepo::append(&session.dir, &User::new(username.clone(), password))?;
    println!("Registered user '{}'.", username);
    Ok(())
}

fn handle_add(
    session: &TaskSession,
    assignee: String,
    title: String,
    description: String,
    due: String,
    completed: bool,
) -> Result<()> {
    let assignee = assignee.trim();
    if UserRepo::find(&session.users, assignee).is_none() {
        unknown_user_error(&session.users, assignee);
    }

    let title = title.trim();
    let description = description.trim();
    validate_record_field(title, "Title")?;
    validate_record_field(description, "Description")?;

    let due_date = match parse_task_date(&due) {
        Ok(date) => date,
        Err(e) => user_error(&e.to_string()),
    };

    let mut task = TaskRecord::new(assignee.to_string(), title.to_string(), description.to_string(), due_date);
    task.completed = completed;

    TaskRepo::append(&session.dir, &task)?;
    println!("Task '{}' assigned to {}.", task.title, task.assignee);
    Ok(())
}

fn handle_list(session: &TaskSession, json: bool) -> Result<()> {
    let tasks = TaskRepo::load(&session.dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    for (i, task) in tasks.iter().enumerate() {
        println!("{}", format_task_block(task, i + 1));
    }
    Ok(())
}

fn handle_mine(session: &TaskSession, json: bool) -> Result<()> {
    let tasks = TaskRepo::load(&session.dir)?;
    let mine: Vec<&TaskRecord> = tasks.iter()
        .filter(|t| t.assignee == session.current.username)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&mine)?);
        return Ok(());
    }

    if mine.is_empty() {
        println!("No tasks found for your user.");
        return Ok(());
    }

    println!("Your Tasks:");
    for (i, task) in mine.iter().enumerate() {
        println!("{}", format_task_line(task, i + 1));
    }
    Ok(())
}

/// Load tasks for a command that rewrites `tasks.txt`
///
/// Refuses while any line has an unreadable date, since the rewrite would drop it.
fn load_for_rewrite(session: &TaskSession) -> Result<Vec<TaskRecord>> {
    let file = TaskRepo::read(&session.dir)?;
    if !file.unreadable.is_empty() {
        let lines: Vec<String> = file.unreadable.iter().map(|n| n.to_string()).collect();
        user_error(&format!(
            "{} has unreadable dates on line(s) {}. Fix them (use 'DD Mon YYYY') before changing tasks.",
            TaskRepo::path(&session.dir).display(),
            lines.join(", ")
        ));
    }
    Ok(file.tasks)
}

/// Load tasks and resolve one of the current user's task numbers
/// Exits with a user error when the number is invalid or the task is completed
fn load_editable_task(session: &TaskSession, number: &str) -> Result<(Vec<TaskRecord>, usize)> {
    let number = validate_task_number(number)?;
    let tasks = load_for_rewrite(session)?;

    let index = match TaskRepo::resolve_user_number(&tasks, &session.current.username, number) {
        Some(index) => index,
        None => {
            let count = TaskRepo::indices_for(&tasks, &session.current.username).len();
            user_error(&format!("Invalid task number: {}. You have {} task(s).", number, count));
        }
    };

    if tasks[index].completed {
        user_error("This task is already completed and cannot be edited.");
    }

    Ok((tasks, index))
}

fn handle_complete(session: &TaskSession, number: &str) -> Result<()> {
    let (mut tasks, index) = load_editable_task(session, number)?;

    tasks[index].completed = true;
    TaskRepo::save(&session.dir, &tasks)?;

    println!("Task '{}' marked as complete.", tasks[index].title);
    Ok(())
}

fn handle_edit(session: &TaskSession, number: &str, assign: Option<String>, due: Option<String>) -> Result<()> {
    if assign.is_none() && due.is_none() {
        user_error("Nothing to change. Use --assign and/or --due.");
    }

    let (mut tasks, index) = load_editable_task(session, number)?;

    if let Some(new_assignee) = assign {
        let new_assignee = new_assignee.trim();
        if UserRepo::find(&session.users, new_assignee).is_none() {
            unknown_user_error(&session.users, new_assignee);
        }
        tasks[index].assignee = new_assignee.to_string();
    }

    if let Some(due) = due {
        tasks[index].due_date = match parse_task_date(&due) {
            Ok(date) => date,
            Err(e) => user_error(&e.to_string()),
        };
    }

    TaskRepo::save(&session.dir, &tasks)?;

    let task = &tasks[index];
    println!("Task '{}' updated (assigned to {}, due {}).",
        task.title,
        task.assignee,
        crate::utils::format_task_date(task.due_date));
    Ok(())
}

fn handle_completed(session: &TaskSession, json: bool) -> Result<()> {
    let tasks = TaskRepo::load(&session.dir)?;
    let completed: Vec<&TaskRecord> = tasks.iter().filter(|t| t.completed).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&completed)?);
        return Ok(());
    }

    if completed.is_empty() {
        println!("No completed tasks found.");
        return Ok(());
    }

    for task in completed {
        println!("{}", format_completed_block(task));
    }
    Ok(())
}

fn handle_delete(session: &TaskSession, number: &str, yes: bool) -> Result<()> {
    session.require_admin("delete tasks");

    let number = validate_task_number(number)?;
    let mut tasks = load_for_rewrite(session)?;

    if tasks.is_empty() {
        user_error("No tasks found.");
    }
    if number > tasks.len() {
        user_error(&format!("Invalid task number: {}. There are {} task(s).", number, tasks.len()));
    }

    let index = number - 1;
    if !yes && !confirm(&format!("Delete task {} ({})?", number, tasks[index].title))? {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = tasks.remove(index);
    TaskRepo::save(&session.dir, &tasks)?;
    println!("Deleted task {} ({}).", number, removed.title);
    Ok(())
}

fn compute_overviews(session: &TaskSession) -> Result<(TaskOverview, UserOverview)> {
    let tasks = TaskRepo::load(&session.dir)?;
    let today = today();

    let task_overview = TaskOverview::compute(&tasks, today);
    let user_overview = UserOverview::compute(&session.users, &tasks, today);
    Ok((task_overview, user_overview))
}

/// Compute both overviews and write the report files
fn generate_reports(session: &TaskSession) -> Result<()> {
    let (task_overview, user_overview) = compute_overviews(session)?;
    report::write_reports(&session.dir, &task_overview, &user_overview)
}

fn handle_report(session: &TaskSession) -> Result<()> {
    session.require_admin("generate reports");

    generate_reports(session)?;
    println!("Reports generated successfully.");
    Ok(())
}

fn handle_stats(session: &TaskSession, json: bool) -> Result<()> {
    session.require_admin("display statistics");

    if json {
        let (task_overview, user_overview) = compute_overviews(session)?;
        let value = serde_json::json!({
            "task_overview": task_overview,
            "user_overview": user_overview,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !report::reports_exist(&session.dir) {
        println!("Reports not found, generating reports first...");
        generate_reports(session)?;
    }

    let (task_report, user_report) = report::read_reports(&session.dir)?;
    println!("--- Task Overview ---");
    println!("{}", task_report);
    println!("--- User Overview ---");
    println!("{}", user_report);
    Ok(())
}
