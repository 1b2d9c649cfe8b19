use rusqlite::Connection;
use std::path::Path;
use anyhow::{Context, Result};
use crate::config::Config;
use crate::db::migrations::MigrationManager;

/// Bookstore database connection manager
pub struct DbConnection;

impl DbConnection {
    /// Connect to the configured bookstore database
    pub fn connect() -> Result<Connection> {
        let config = Config::load()?;
        Self::connect_at(config.shelf_path())
    }

    /// Connect to a database file, creating it and parent directories if needed
    pub fn connect_at(db_path: &Path) -> Result<Connection> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
        log::debug!("Opened bookstore database {}", db_path.display());

        conn.execute("PRAGMA foreign_keys=ON", [])
            .context("Failed to enable foreign keys")?;

        MigrationManager::initialize(&conn)
            .context("Failed to initialize database schema")?;

        Ok(conn)
    }

    /// Connect to an in-memory database (for testing)
    pub fn connect_in_memory() -> Result<Connection> {
        let conn = Connection::open_in_memory()
            .context("Failed to open in-memory database")?;

        conn.execute("PRAGMA foreign_keys=ON", [])
            .context("Failed to enable foreign keys")?;

        MigrationManager::initialize(&conn)
            .context("Failed to initialize database schema")?;

        Ok(conn)
    }
}
