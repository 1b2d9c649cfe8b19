use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::models::{User, ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD};

/// User repository backed by `user.txt`
///
/// Users are kept in file order; the administrator is created on first use
/// when the file does not exist yet.
pub struct UserRepo;

impl UserRepo {
    pub const FILE_NAME: &'static str = "user.txt";

    pub fn path(dir: &Path) -> PathBuf {
        dir.join(Self::FILE_NAME)
    }

    /// Load all users, creating `user.txt` with the default admin if missing
    pub fn load(dir: &Path) -> Result<Vec<User>> {
        let path = Self::path(dir);

        if !path.exists() {
            log::warn!("{} is missing. Creating a default one with admin user.", path.display());
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            let admin = User::new(ADMIN_USERNAME.to_string(), DEFAULT_ADMIN_PASSWORD.to_string());
            std::fs::write(&path, format!("{}\n", admin.to_line()))
                .with_context(|| format!("Failed to create user file: {}", path.display()))?;
            return Ok(vec![admin]);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read user file: {}", path.display()))?;

        let mut users: Vec<User> = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match User::from_line(line) {
                Some(user) => {
                    if users.iter().any(|u| u.username == user.username) {
                        log::warn!("Duplicate user '{}' on line {} of {}", user.username, line_no + 1, path.display());
                        continue;
                    }
                    users.push(user);
                }
                None => log::warn!("Skipping malformed line {} of {}", line_no + 1, path.display()),
            }
        }

        log::debug!("Loaded {} users from {}", users.len(), path.display());
        Ok(users)
    }

    /// Find a user by exact username
    pub fn find<'a>(users: &'a [User], username: &str) -> Option<&'a User> {
        users.iter().find(|u| u.username == username)
    }

    /// Check credentials against the loaded users
    pub fn authenticate<'a>(users: &'a [User], username: &str, password: &str) -> Option<&'a User> {
        Self::find(users, username).filter(|u| u.password == password)
    }

    /// Append a new user to `user.txt`
    pub fn append(dir: &Path, user: &User) -> Result<()> {
        let path = Self::path(dir);
        super::append_line(&path, &user.to_line())
            .with_context(|| format!("Failed to append to user file: {}", path.display()))?;
        log::debug!("Registered user '{}'", user.username);
        Ok(())
    }
}
