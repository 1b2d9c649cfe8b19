use rusqlite::{Connection, Result};
use std::collections::HashMap;

/// Current database schema version
const CURRENT_VERSION: u32 = 2;

/// Authors seeded into a fresh database: (id, name, country)
pub const STARTER_AUTHORS: &[(i64, &str, &str)] = &[
    (1290, "Charles Dickens", "England"),
    (8937, "J.K. Rowling", "England"),
    (2356, "C.S. Lewis", "Ireland"),
    (6380, "J.R.R. Tolkien", "South Africa"),
    (5620, "Lewis Carroll", "England"),
];

/// Books seeded into a fresh database: (id, title, author_id, qty)
pub const STARTER_BOOKS: &[(i64, &str, i64, i64)] = &[
    (3001, "A Tale of Two Cities", 1290, 30),
    (3002, "Harry Potter and the Philosopher's Stone", 8937, 40),
    (3003, "The Lion, the Witch and the Wardrobe", 2356, 25),
    (3004, "The Lord of the Rings", 6380, 37),
    (3005, "Alice's Adventures in Wonderland", 5620, 12),
];

/// Migration system for managing database schema versions
pub struct MigrationManager;

impl MigrationManager {
    /// Initialize the database with the current schema
    /// This creates the schema_version table and applies all migrations
    pub fn initialize(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY
            )",
            [],
        )?;

        let current_version = Self::get_version(conn)?;

        for version in (current_version + 1)..=CURRENT_VERSION {
            Self::apply_migration(conn, version)?;
        }

        Ok(())
    }

    /// Apply a specific migration by version number
    fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
        let migrations = get_migrations();
        if let Some(migration) = migrations.get(&version) {
            log::debug!("Applying schema migration v{}", version);
            let tx = conn.unchecked_transaction()?;
            migration(&tx)?;
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                [version],
            )?;
            tx.commit()?;
            Ok(())
        } else {
            Err(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_MISUSE),
                Some(format!("No migration found for version {}", version)),
            ))
        }
    }

    /// Get the current schema version
    pub fn get_version(conn: &Connection) -> Result<u32> {
        conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
    }
}

/// Get all migrations indexed by version
fn get_migrations() -> HashMap<u32, fn(&rusqlite::Transaction) -> Result<(), rusqlite::Error>> {
    let mut migrations: HashMap<u32, fn(&rusqlite::Transaction) -> Result<(), rusqlite::Error>> = HashMap::new();
    migrations.insert(1, migration_v1);
    migrations.insert(2, migration_v2);
    migrations
}

/// Migration v1: author and book tables
fn migration_v1(tx: &rusqlite::Transaction) -> Result<(), rusqlite::Error> {
    tx.execute(
        "CREATE TABLE author (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            country TEXT NOT NULL
        )",
        [],
    )?;

    tx.execute(
        "CREATE TABLE book (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES author(id),
            qty INTEGER NOT NULL CHECK (qty >= 0)
        )",
        [],
    )?;
    tx.execute(
        "CREATE INDEX idx_book_author_id ON book(author_id)",
        [],
    )?;
    tx.execute(
        "CREATE INDEX idx_book_title ON book(title)",
        [],
    )?;

    Ok(())
}

/// Migration v2: starter catalogue
// Seeded once; emptying the shelf later does not bring the starter books back.
fn migration_v2(tx: &rusqlite::Transaction) -> Result<(), rusqlite::Error> {
    for (id, name, country) in STARTER_AUTHORS {
        tx.execute(
            "INSERT OR IGNORE INTO author (id, name, country) VALUES (?1, ?2, ?3)",
            rusqlite::params![id, name, country],
        )?;
    }
    for (id, title, author_id, qty) in STARTER_BOOKS {
        tx.execute(
            "INSERT OR IGNORE INTO book (id, title, author_id, qty) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id, title, author_id, qty],
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = Connection::open_in_memory().unwrap();
        MigrationManager::initialize(&conn).unwrap();

        assert_eq!(MigrationManager::get_version(&conn).unwrap(), CURRENT_VERSION);

        let authors: i64 = conn.query_row("SELECT COUNT(*) FROM author", [], |row| row.get(0)).unwrap();
        let books: i64 = conn.query_row("SELECT COUNT(*) FROM book", [], |row| row.get(0)).unwrap();
        assert_eq!(authors, STARTER_AUTHORS.len() as i64);
        assert_eq!(books, STARTER_BOOKS.len() as i64);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        MigrationManager::initialize(&conn).unwrap();
        MigrationManager::initialize(&conn).unwrap();

        let versions: i64 = conn.query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0)).unwrap();
        assert_eq!(versions, CURRENT_VERSION as i64);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        MigrationManager::initialize(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO book (id, title, author_id, qty) VALUES (4000, 'Bad', 1290, -1)",
            [],
        );
        assert!(result.is_err());
    }
}
