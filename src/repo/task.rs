use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::models::{TaskLineError, TaskRecord};

/// Parsed contents of `tasks.txt`
#[derive(Debug, Default)]
pub struct TaskFile {
    pub tasks: Vec<TaskRecord>,
    /// 1-based line numbers of six-field lines whose dates do not parse
    pub unreadable: Vec<usize>,
}

/// Task repository backed by `tasks.txt`
///
/// Task numbers shown to users are 1-based positions: either in the whole
/// file (`list`, `delete`) or among one user's tasks (`mine`, `complete`,
/// `edit`). Lines without six fields are skipped when reading and dropped on
/// rewrite. Six-field lines with unparsable dates are also skipped, but are
/// reported in [`TaskFile::unreadable`] so callers can refuse to rewrite.
pub struct TaskRepo;

impl TaskRepo {
    pub const FILE_NAME: &'static str = "tasks.txt";

    pub fn path(dir: &Path) -> PathBuf {
        dir.join(Self::FILE_NAME)
    }

    /// Load all well-formed tasks in file order (empty if the file is missing)
    pub fn load(dir: &Path) -> Result<Vec<TaskRecord>> {
        Ok(Self::read(dir)?.tasks)
    }

    /// Read `tasks.txt`, keeping track of lines with unreadable dates
    pub fn read(dir: &Path) -> Result<TaskFile> {
        let path = Self::path(dir);
        if !path.exists() {
            return Ok(TaskFile::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read task file: {}", path.display()))?;

        let mut file = TaskFile::default();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match TaskRecord::from_line(line) {
                Ok(task) => file.tasks.push(task),
                Err(e @ TaskLineError::InvalidDate(_)) => {
                    log::warn!("Unreadable line {} of {}: {}", line_no + 1, path.display(), e);
                    file.unreadable.push(line_no + 1);
                }
                Err(e) => log::warn!("Skipping malformed line {} of {}: {}", line_no + 1, path.display(), e),
            }
        }

        log::debug!("Loaded {} tasks from {}", file.tasks.len(), path.display());
        Ok(file)
    }

    /// Append one task to `tasks.txt`
    pub fn append(dir: &Path, task: &TaskRecord) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        let path = Self::path(dir);
        super::append_line(&path, &task.to_line())
            .with_context(|| format!("Failed to append to task file: {}", path.display()))?;
        log::debug!("Appended task '{}' for {}", task.title, task.assignee);
        Ok(())
    }

    /// Rewrite `tasks.txt` with the given tasks
    pub fn save(dir: &Path, tasks: &[TaskRecord]) -> Result<()> {
        let path = Self::path(dir);
        let mut content = String::new();
        for task in tasks {
            content.push_str(&task.to_line());
            content.push('\n');
        }

        // Write beside the target and rename so a failed write leaves the old file intact
        let tmp_path = dir.join(format!("{}.tmp", Self::FILE_NAME));
        std::fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write task file: {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to replace task file: {}", path.display()))?;

        log::debug!("Saved {} tasks to {}", tasks.len(), path.display());
        Ok(())
    }

    /// Indices (into the full task list) of the tasks assigned to a user
    pub fn indices_for(tasks: &[TaskRecord], username: &str) -> Vec<usize> {
        tasks.iter()
            .enumerate()
            .filter(|(_, t)| t.assignee == username)
            .map(|(i, _)| i)
            .collect()
    }

    /// Resolve a user's 1-based task number to an index into the full list
    pub fn resolve_user_number(tasks: &[TaskRecord], username: &str, number: usize) -> Option<usize> {
        number.checked_sub(1)
            .and_then(|n| Self::indices_for(tasks, username).get(n).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn task(assignee: &str, title: &str) -> TaskRecord {
        TaskRecord::new(
            assignee.to_string(),
            title.to_string(),
            "desc".to_string(),
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(TaskRepo::load(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let temp_dir = TempDir::new().unwrap();
        TaskRepo::append(temp_dir.path(), &task("sam", "First")).unwrap();
        TaskRepo::append(temp_dir.path(), &task("admin", "Second")).unwrap();

        let tasks = TaskRepo::load(temp_dir.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "First");
        assert_eq!(tasks[1].assignee, "admin");
    }

    #[test]
    fn test_append_after_unterminated_last_task() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            TaskRepo::path(temp_dir.path()),
            "sam, T, D, 01 Oct 2024, 25 Oct 2024, No",
        ).unwrap();

        TaskRepo::append(temp_dir.path(), &task("admin", "Second")).unwrap();

        let tasks = TaskRepo::load(temp_dir.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "T");
        assert_eq!(tasks[1].title, "Second");
    }

    #[test]
    fn test_read_reports_unreadable_dates() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            TaskRepo::path(temp_dir.path()),
            "garbage line\nsam, T, D, 01 Oct 2024, 25 Oct 2024, No\nsam, U, D, 01 Oct 2024, 2024-10-25, No\n",
        ).unwrap();

        let file = TaskRepo::read(temp_dir.path()).unwrap();
        assert_eq!(file.tasks.len(), 1);
        assert_eq!(file.unreadable, vec![3]);
    }

    #[test]
    fn test_save_drops_malformed_lines() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            TaskRepo::path(temp_dir.path()),
            "garbage line\nsam, T, D, 01 Oct 2024, 25 Oct 2024, No\n",
        ).unwrap();

        let mut tasks = TaskRepo::load(temp_dir.path()).unwrap();
        assert_eq!(tasks.len(), 1);
        tasks[0].completed = true;
        TaskRepo::save(temp_dir.path(), &tasks).unwrap();

        let content = std::fs::read_to_string(TaskRepo::path(temp_dir.path())).unwrap();
        assert_eq!(content, "sam, T, D, 01 Oct 2024, 25 Oct 2024, Yes\n");
    }

    #[test]
    fn test_resolve_user_number() {
        let tasks = vec![task("sam", "a"), task("admin", "b"), task("sam", "c")];

        assert_eq!(TaskRepo::indices_for(&tasks, "sam"), vec![0, 2]);
        assert_eq!(TaskRepo::resolve_user_number(&tasks, "sam", 1), Some(0));
        assert_eq!(TaskRepo::resolve_user_number(&tasks, "sam", 2), Some(2));
        assert_eq!(TaskRepo::resolve_user_number(&tasks, "sam", 3), None);
        assert_eq!(TaskRepo::resolve_user_number(&tasks, "sam", 0), None);
        assert_eq!(TaskRepo::resolve_user_number(&tasks, "nobody", 1), None);
    }
}
