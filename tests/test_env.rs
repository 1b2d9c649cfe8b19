#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};
use assert_cmd::Command;
use tempfile::TempDir;

pub fn lock_test_env() -> MutexGuard<'static, ()> {
    static TEST_ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    TEST_ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner())
}

/// Fresh HOME directory for one test
pub fn setup_test_env() -> (TempDir, MutexGuard<'static, ()>) {
    let guard = lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    (temp_dir, guard)
}

/// Default tasks directory under a test HOME
pub fn tasks_dir(home: &Path) -> PathBuf {
    home.join(".poe").join("tasks")
}

/// `poe` command running against a test HOME
pub fn poe_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("poe").unwrap();
    cmd.env("HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// `poe tasks` command logged in as the given user
pub fn tasks_cmd(home: &Path, user: &str, password: &str) -> Command {
    let mut cmd = poe_cmd(home);
    cmd.args(["tasks", "--user", user, "--password", password]);
    cmd
}

/// `poe tasks` command logged in as the default administrator
pub fn admin_cmd(home: &Path) -> Command {
    tasks_cmd(home, "admin", "adm1n")
}
