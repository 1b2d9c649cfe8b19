use rusqlite::{Connection, OptionalExtension};
use crate::models::{Author, AuthorChanges};
use anyhow::{Context, Result};

/// Author repository for database operations
pub struct AuthorRepo;

impl AuthorRepo {
    /// Create a new author
    pub fn create(conn: &Connection, id: i64, name: &str, country: &str) -> Result<Author> {
        conn.execute(
            "INSERT INTO author (id, name, country) VALUES (?1, ?2, ?3)",
            rusqlite::params![id, name, country],
        )
        .with_context(|| format!("Failed to create author: {}", id))?;

        log::debug!("Created author {} ({})", id, name);
        Ok(Author {
            id,
            name: name.to_string(),
            country: country.to_string(),
        })
    }

    /// Get author by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Author>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, country FROM author WHERE id = ?1"
        )?;

        let author = stmt.query_row([id], |row| {
            Ok(Author {
                id: row.get(0)?,
                name: row.get(1)?,
                country: row.get(2)?,
            })
        }).optional()?;

        Ok(author)
    }

    /// Update name and/or country; fields not given keep their current value
    pub fn update(conn: &Connection, id: i64, changes: &AuthorChanges) -> Result<()> {
        let rows_affected = conn.execute(
            "UPDATE author
             SET name = COALESCE(?1, name),
                 country = COALESCE(?2, country)
             WHERE id = ?3",
            rusqlite::params![changes.name, changes.country, id],
        )
        .with_context(|| format!("Failed to update author: {}", id))?;

        if rows_affected == 0 {
            anyhow::bail!("Author {} not found", id);
        }

        log::debug!("Updated author {}", id);
        Ok(())
    }
}
