use rusqlite::{Connection, OptionalExtension, Row};
use crate::models::{Author, Book, BookDetails};
use crate::repo::AuthorRepo;
use anyhow::{Context, Result};

const DETAILS_SELECT: &str =
    "SELECT b.id, b.title, b.qty, a.id, a.name, a.country
     FROM book b JOIN author a ON b.author_id = a.id";

/// Book repository for database operations
///
/// Books always reference an existing author; adding a book for an unknown
/// author creates the author in the same transaction.
///
/// # Example
///
/// ```no_run
/// use poe::db::DbConnection;
/// use poe::repo::BookRepo;
///
/// let conn = DbConnection::connect().unwrap();
/// let matches = BookRepo::search_title(&conn, "lord").unwrap();
/// ```
pub struct BookRepo;

impl BookRepo {
    /// Create a new book for an existing author
    pub fn create(conn: &Connection, id: i64, title: &str, author_id: i64, qty: i64) -> Result<Book> {
        conn.execute(
            "INSERT INTO book (id, title, author_id, qty) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id, title, author_id, qty],
        )
        .with_context(|| format!("Failed to create book: {}", id))?;

        log::debug!("Created book {} ({})", id, title);
        Ok(Book {
            id,
            title: title.to_string(),
            author_id,
            qty,
        })
    }

    /// Create a book together with a new author in one transaction
    pub fn create_with_author(conn: &Connection, book_id: i64, title: &str, qty: i64, author: &Author) -> Result<Book> {
        let tx = conn.unchecked_transaction()?;
        AuthorRepo::create(&tx, author.id, &author.name, &author.country)?;
        let book = Self::create(&tx, book_id, title, author.id, qty)?;
        tx.commit()?;
        Ok(book)
    }

    /// Check whether a book ID is taken
    pub fn exists(conn: &Connection, id: i64) -> Result<bool> {
        let found = conn.query_row(
            "SELECT 1 FROM book WHERE id = ?1",
            [id],
            |_| Ok(()),
        ).optional()?;
        Ok(found.is_some())
    }

    /// Get book by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Book>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, author_id, qty FROM book WHERE id = ?1"
        )?;

        let book = stmt.query_row([id], |row| {
            Ok(Book {
                id: row.get(0)?,
                title: row.get(1)?,
                author_id: row.get(2)?,
                qty: row.get(3)?,
            })
        }).optional()?;

        Ok(book)
    }

    /// Get book joined with its author
    pub fn get_details(conn: &Connection, id: i64) -> Result<Option<BookDetails>> {
        let mut stmt = conn.prepare(&format!("{} WHERE b.id = ?1", DETAILS_SELECT))?;
        let details = stmt.query_row([id], details_from_row).optional()?;
        Ok(details)
    }

    /// List every book with its author, ordered by title
    pub fn list_details(conn: &Connection) -> Result<Vec<BookDetails>> {
        let mut stmt = conn.prepare(&format!("{} ORDER BY b.title, b.id", DETAILS_SELECT))?;
        let rows = stmt.query_map([], details_from_row)?;

        let mut books = Vec::new();
        for row in rows {
            books.push(row?);
        }
        Ok(books)
    }

    /// Find books whose title contains a keyword (case-insensitive)
    pub fn search_title(conn: &Connection, keyword: &str) -> Result<Vec<BookDetails>> {
        let mut stmt = conn.prepare(&format!(
            "{} WHERE b.title LIKE ?1 ESCAPE '\\' ORDER BY b.title, b.id",
            DETAILS_SELECT
        ))?;
        let pattern = format!("%{}%", escape_like(keyword.trim()));
        let rows = stmt.query_map([pattern], details_from_row)?;

        let mut books = Vec::new();
        for row in rows {
            books.push(row?);
        }
        Ok(books)
    }

    /// Set the stock quantity
    pub fn set_qty(conn: &Connection, id: i64, qty: i64) -> Result<()> {
        let rows_affected = conn.execute(
            "UPDATE book SET qty = ?1 WHERE id = ?2",
            rusqlite::params![qty, id],
        )
        .with_context(|| format!("Failed to update quantity of book {}", id))?;

        if rows_affected == 0 {
            anyhow::bail!("Book {} not found", id);
        }
        log::debug!("Set quantity of book {} to {}", id, qty);
        Ok(())
    }

    /// Set the title
    pub fn set_title(conn: &Connection, id: i64, title: &str) -> Result<()> {
        let rows_affected = conn.execute(
            "UPDATE book SET title = ?1 WHERE id = ?2",
            rusqlite::params![title, id],
        )
        .with_context(|| format!("Failed to update title of book {}", id))?;

        if rows_affected == 0 {
            anyhow::bail!("Book {} not found", id);
        }
        log::debug!("Set title of book {}", id);
        Ok(())
    }

    /// Delete a book; returns false if it did not exist
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let rows_affected = conn.execute("DELETE FROM book WHERE id = ?1", [id])
            .with_context(|| format!("Failed to delete book {}", id))?;
        log::debug!("Deleted book {} ({} rows)", id, rows_affected);
        Ok(rows_affected > 0)
    }
}

fn details_from_row(row: &Row) -> rusqlite::Result<BookDetails> {
    Ok(BookDetails {
        id: row.get(0)?,
        title: row.get(1)?,
        qty: row.get(2)?,
        author: Author {
            id: row.get(3)?,
            name: row.get(4)?,
            country: row.get(5)?,
        },
    })
}

// LIKE wildcards in user keywords match literally
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
