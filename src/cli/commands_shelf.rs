// Bookstore inventory command handlers

use rusqlite::Connection;
use crate::cli::commands::{confirm, ShelfCommands};
use crate::cli::error::{user_error, validate_four_digit_id, validate_non_empty, validate_quantity};
use crate::cli::output::{format_book_details, format_book_match, rule};
use crate::db::DbConnection;
use crate::models::{Author, AuthorChanges};
use crate::repo::{AuthorRepo, BookRepo};
use anyhow::{Context, Result};

pub fn handle_shelf(cmd: ShelfCommands) -> Result<()> {
    let conn = DbConnection::connect()
        .context("Failed to connect to database")?;

    match cmd {
        ShelfCommands::Add { book_id, title, qty, author_id, author_name, author_country } => {
            handle_add(&conn, &book_id, &title, qty, &author_id, author_name, author_country)
        }
        ShelfCommands::Update { book_id, qty, title, author_name, author_country } => {
            handle_update(&conn, &book_id, qty, title, author_name, author_country)
        }
        ShelfCommands::Delete { book_id, yes } => handle_delete(&conn, &book_id, yes),
        ShelfCommands::Search { id, title } => handle_search(&conn, id, title),
        ShelfCommands::List { json } => handle_list(&conn, json),
        ShelfCommands::Show { book_id, json } => handle_show(&conn, &book_id, json),
    }
}

/// Trim an optional text argument, rejecting blank values
fn non_blank(value: Option<String>, field_name: &str) -> Result<Option<String>> {
    match value {
        Some(v) => {
            validate_non_empty(&v, field_name)?;
            Ok(Some(v.trim().to_string()))
        }
        None => Ok(None),
    }
}

fn handle_add(
    conn: &Connection,
    book_id: &str,
    title: &str,
    qty: i64,
    author_id: &str,
    author_name: Option<String>,
    author_country: Option<String>,
) -> Result<()> {
    let book_id = validate_four_digit_id(book_id, "book")?;
    let author_id = validate_four_digit_id(author_id, "author")?;
    validate_non_empty(title, "Title")?;
    let title = title.trim();
    let qty = validate_quantity(qty)?;
    let author_name = non_blank(author_name, "Author name")?;
    let author_country = non_blank(author_country, "Author country")?;

    if BookRepo::exists(conn, book_id)? {
        user_error(&format!("Book ID {} already exists. Choose a different one.", book_id));
    }

    if AuthorRepo::get_by_id(conn, author_id)?.is_some() {
        if author_name.is_some() || author_country.is_some() {
            log::warn!("Author {} already exists; ignoring --author-name/--author-country", author_id);
        }
        BookRepo::create(conn, book_id, title, author_id, qty)?;
        println!("Added book {} ({}).", book_id, title);
        return Ok(());
    }

    let (name, country) = match (author_name, author_country) {
        (Some(name), Some(country)) => (name, country),
        _ => user_error(&format!(
            "Author ID {} not found. Provide --author-name and --author-country to create it.",
            author_id
        )),
    };

    let author = Author { id: author_id, name, country };
    BookRepo::create_with_author(conn, book_id, title, qty, &author)?;
    println!("Added author {} ({}).", author.id, author.name);
    println!("Added book {} ({}).", book_id, title);
    Ok(())
}

fn handle_update(
    conn: &Connection,
    book_id: &str,
    qty: Option<i64>,
    title: Option<String>,
    author_name: Option<String>,
    author_country: Option<String>,
) -> Result<()> {
    let book_id = validate_four_digit_id(book_id, "book")?;
    let qty = qty.map(validate_quantity).transpose()?;
    let title = non_blank(title, "Title")?;
    let author_changes = AuthorChanges {
        name: non_blank(author_name, "Author name")?,
        country: non_blank(author_country, "Author country")?,
    };

    if qty.is_none() && title.is_none() && author_changes.is_empty() {
        user_error("Nothing to update. Use --qty, --title, --author-name or --author-country.");
    }

    let book = match BookRepo::get_by_id(conn, book_id)? {
        Some(book) => book,
        None => user_error(&format!("No book matches ID {}.", book_id)),
    };

    let tx = conn.unchecked_transaction()?;
    if let Some(qty) = qty {
        BookRepo::set_qty(&tx, book_id, qty)?;
        println!("Quantity updated.");
    }
    if let Some(title) = &title {
        BookRepo::set_title(&tx, book_id, title)?;
        println!("Title updated.");
    }
    if !author_changes.is_empty() {
        AuthorRepo::update(&tx, book.author_id, &author_changes)?;
        println!("Author updated.");
    }
    tx.commit()?;

    Ok(())
}

fn handle_delete(conn: &Connection, book_id: &str, yes: bool) -> Result<()> {
    let book_id = validate_four_digit_id(book_id, "book")?;

    let book = match BookRepo::get_by_id(conn, book_id)? {
        Some(book) => book,
        None => user_error(&format!("No book matches ID {}.", book_id)),
    };

    if !yes && !confirm(&format!("Delete book {} ({})? Are you sure?", book.id, book.title))? {
        println!("Deletion cancelled.");
        return Ok(());
    }

    BookRepo::delete(conn, book_id)?;
    println!("Deleted book {} ({}).", book.id, book.title);
    Ok(())
}

fn handle_search(conn: &Connection, id: Option<String>, title: Option<String>) -> Result<()> {
    if let Some(id) = id {
        let book_id = validate_four_digit_id(&id, "book")?;
        match BookRepo::get_details(conn, book_id)? {
            Some(book) => {
                println!("Title   : {}", book.title);
                println!("Author  : {} ({})", book.author.name, book.author.country);
                println!("In stock: {}", book.qty);
            }
            None => println!("No matches."),
        }
        return Ok(());
    }

    let keyword = title.unwrap_or_default();
    validate_non_empty(&keyword, "Keyword")?;

    let books = BookRepo::search_title(conn, &keyword)?;
    if books.is_empty() {
        println!("No matches.");
    } else {
        for book in &books {
            println!("{}", format_book_match(book));
        }
    }
    Ok(())
}

fn handle_list(conn: &Connection, json: bool) -> Result<()> {
    let books = BookRepo::list_details(conn)
        .context("Failed to list books")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books yet.");
        return Ok(());
    }

    let rule = rule();
    for book in &books {
        println!("{}", rule);
        println!("{}", format_book_details(book));
    }
    println!("{}", rule);
    Ok(())
}

fn handle_show(conn: &Connection, book_id: &str, json: bool) -> Result<()> {
    let book_id = validate_four_digit_id(book_id, "book")?;

    let book = match BookRepo::get_details(conn, book_id)? {
        Some(book) => book,
        None => user_error(&format!("No book matches ID {}.", book_id)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        println!("{}", format_book_details(&book));
    }
    Ok(())
}
