// Task manager reports (task_overview.txt / user_overview.txt)

pub mod overview;

pub use overview::*;

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

pub const TASK_OVERVIEW_FILE: &str = "task_overview.txt";
pub const USER_OVERVIEW_FILE: &str = "user_overview.txt";

pub fn task_overview_path(dir: &Path) -> PathBuf {
    dir.join(TASK_OVERVIEW_FILE)
}

pub fn user_overview_path(dir: &Path) -> PathBuf {
    dir.join(USER_OVERVIEW_FILE)
}

/// Check whether both report files exist
pub fn reports_exist(dir: &Path) -> bool {
    task_overview_path(dir).exists() && user_overview_path(dir).exists()
}

/// Write both report files into the tasks directory
pub fn write_reports(dir: &Path, tasks: &TaskOverview, users: &UserOverview) -> Result<()> {
    let task_path = task_overview_path(dir);
    std::fs::write(&task_path, tasks.render())
        .with_context(|| format!("Failed to write report: {}", task_path.display()))?;

    let user_path = user_overview_path(dir);
    std::fs::write(&user_path, users.render())
        .with_context(|| format!("Failed to write report: {}", user_path.display()))?;

    log::debug!("Wrote reports to {}", dir.display());
    Ok(())
}

/// Read both report files as (task overview, user overview)
pub fn read_reports(dir: &Path) -> Result<(String, String)> {
    let task_path = task_overview_path(dir);
    let task_report = std::fs::read_to_string(&task_path)
        .with_context(|| format!("Failed to read report: {}", task_path.display()))?;

    let user_path = user_overview_path(dir);
    let user_report = std::fs::read_to_string(&user_path)
        .with_context(|| format!("Failed to read report: {}", user_path.display()))?;

    Ok((task_report, user_report))
}
