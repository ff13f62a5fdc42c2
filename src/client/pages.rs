//! Terminal pages: one API call per user action, with loading, success and error states

use std::future::Future;
use std::io::{self, BufRead, Write};

use super::{
    progress::{notify_error, notify_success, Progress},
    BooksClient, ClientError,
};
use crate::models::book::{Book, BookPayload};

/// How the home page lays out the book list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    #[default]
    Table,
    Card,
}

/// Fields given on the command line for the edit page; absent ones keep the current value
#[derive(Debug, Clone, Default)]
pub struct BookEdit {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publish_year: Option<i32>,
}

impl BookEdit {
    /// Overlay the edited fields on the stored book, always sending all three
    pub fn apply(self, book: &Book) -> BookPayload {
        BookPayload {
            title: Some(self.title.unwrap_or_else(|| book.title.clone())),
            author: Some(self.author.unwrap_or_else(|| book.author.clone())),
            publish_year: Some(self.publish_year.unwrap_or(book.publish_year)),
        }
    }
}

/// Run one request behind a spinner. Failures are reported to the user
/// uniformly, whatever the status code, and logged.
async fn load<T, F>(message: &str, request: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    let progress = Progress::spinner(message);
    let result = request.await;
    progress.finish();

    if let Err(e) = &result {
        notify_error("Error");
        tracing::error!("{}", e);
    }
    result
}

/// Home page: every book as a table or as cards
pub async fn home(client: &BooksClient, view: View) -> Result<(), ClientError> {
    let list = load("Loading books...", client.list()).await?;

    println!("Books List ({})", list.count);
    match view {
        View::Table => print!("{}", render_table(&list.data)),
        View::Card => print!("{}", render_cards(&list.data)),
    }
    Ok(())
}

/// Show page: a single book with its timestamps
pub async fn show(client: &BooksClient, id: &str) -> Result<(), ClientError> {
    let book = load("Loading book...", client.get(id)).await?;

    println!("Show Book");
    print!("{}", render_book(&book));
    Ok(())
}

pub async fn create(client: &BooksClient, payload: BookPayload) -> Result<(), ClientError> {
    load("Saving book...", client.create(&payload)).await?;
    notify_success("Book Created successfully");
    home(client, View::default()).await
}

/// Edit page: load the current record, apply the edits, save all three fields
pub async fn edit(client: &BooksClient, id: &str, edit: BookEdit) -> Result<(), ClientError> {
    let book = load("Loading book...", client.get(id)).await?;
    let payload = edit.apply(&book);

    load("Saving book...", client.update(id, &payload)).await?;
    notify_success("Book Edited successfully");
    home(client, View::default()).await
}

/// Delete page; nothing is sent unless `confirmed`
pub async fn delete(client: &BooksClient, id: &str, confirmed: bool) -> Result<(), ClientError> {
    if !confirmed {
        println!("Delete cancelled");
        return Ok(());
    }

    load("Deleting book...", client.delete(id)).await?;
    notify_success("Book Deleted successfully");
    home(client, View::default()).await
}

/// Ask a yes/no question on the terminal
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

pub fn render_table(books: &[Book]) -> String {
    let headers = ["No", "Title", "Author", "Publish Year", "Id"];
    let rows: Vec<[String; 5]> = books
        .iter()
        .enumerate()
        .map(|(index, book)| {
            [
                (index + 1).to_string(),
                book.title.clone(),
                book.author.clone(),
                book.publish_year.to_string(),
                book.id.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 5]| -> String {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("{}\n", line.trim_end())
    };

    let mut out = format_row(headers);
    out.push_str(&format!(
        "{}\n",
        widths
            .map(|w| "-".repeat(w))
            .join("-+-")
    ));
    for row in &rows {
        out.push_str(&format_row([&row[0], &row[1], &row[2], &row[3], &row[4]]));
    }
    out
}

pub fn render_cards(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| {
            format!(
                "[{}] {}\n  by {}\n  id: {}\n",
                book.publish_year, book.title, book.author, book.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_book(book: &Book) -> String {
    format!(
        "Id: {}\nTitle: {}\nAuthor: {}\nPublish Year: {}\nCreate Time: {}\nLast Update Time: {}\n",
        book.id,
        book.title,
        book.author,
        book.publish_year,
        book.created_at.to_rfc2822(),
        book.updated_at.to_rfc2822(),
    )
}
