use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

/// Name of the per-user directory holding the rc file and default data
const CONFIG_DIR: &str = ".poe";

/// Data locations for the exercises
///
/// Read from `~/.poe/rc`, which holds `key=value` lines:
///
/// ```text
/// # where user.txt, tasks.txt and the reports live
/// tasks.location=./tasks
/// # bookstore database
/// shelf.location=/var/lib/poe/ebookstore.db
/// ```
///
/// Relative paths are resolved against the directory containing the rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tasks_dir: PathBuf,
    pub shelf_path: PathBuf,
}

impl Config {
    /// Get the per-user configuration directory
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Failed to determine home directory")?;
        Ok(home.join(CONFIG_DIR))
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("rc"))
    }

    /// Load configuration from the rc file, falling back to defaults
    pub fn load() -> Result<Config> {
        let base = Self::base_dir()?;
        let defaults = Config {
            tasks_dir: base.join("tasks"),
            shelf_path: base.join("ebookstore.db"),
        };

        let config_path = base.join("rc");
        if !config_path.exists() {
            return Ok(defaults);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        Ok(Self::parse(&content, &base, defaults))
    }

    /// Apply rc file content on top of defaults
    pub fn parse(content: &str, base: &Path, defaults: Config) -> Config {
        let mut config = defaults;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::warn!("Ignoring malformed config line: {}", line);
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "tasks.location" => config.tasks_dir = resolve(base, value),
                "shelf.location" => config.shelf_path = resolve(base, value),
                other => log::debug!("Ignoring unknown config key: {}", other),
            }
        }

        config
    }

    /// Directory holding task manager files
    pub fn tasks_dir(&self) -> &Path {
        &self.tasks_dir
    }

    /// Bookstore database file
    pub fn shelf_path(&self) -> &Path {
        &self.shelf_path
    }
}

fn resolve(base: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults(base: &Path) -> Config {
        Config {
            tasks_dir: base.join("tasks"),
            shelf_path: base.join("ebookstore.db"),
        }
    }

    #[test]
    fn test_parse_empty_keeps_defaults() {
        let base = PathBuf::from("/home/me/.poe");
        let config = Config::parse("", &base, defaults(&base));
        assert_eq!(config, defaults(&base));
    }

    #[test]
    fn test_parse_relative_and_absolute() {
        let base = PathBuf::from("/home/me/.poe");
        let content = "# comment\ntasks.location=./work\n\nshelf.location=/srv/books.db\n";
        let config = Config::parse(content, &base, defaults(&base));
        assert_eq!(config.tasks_dir(), base.join("./work").as_path());
        assert_eq!(config.shelf_path(), Path::new("/srv/books.db"));
    }

    #[test]
    fn test_parse_ignores_unknown_and_malformed() {
        let base = PathBuf::from("/home/me/.poe");
        let content = "data.location=x.db\nnot a setting\n";
        let config = Config::parse(content, &base, defaults(&base));
        assert_eq!(config, defaults(&base));
    }
}
