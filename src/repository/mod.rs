//! Record store layer for book persistence

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, BookId, NewBook},
};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Storage backend for book records.
///
/// Lookups by id return `None` when no record matches; turning that into a
/// not-found error is left to the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, in store order
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, id: BookId) -> AppResult<Option<Book>>;

    /// Persist a new book; the store assigns id and timestamps
    async fn create(&self, book: &NewBook) -> AppResult<Book>;

    /// Replace title, author and publish year of an existing book
    async fn update(&self, id: BookId, book: &NewBook) -> AppResult<Option<Book>>;

    /// Remove a book, returning the removed record
    async fn delete(&self, id: BookId) -> AppResult<Option<Book>>;

    /// Readiness check
    async fn ping(&self) -> AppResult<()>;

    /// Release connections held by the store
    async fn close(&self) {}
}
