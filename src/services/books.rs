//! Book management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, BookList, NewBook},
    repository::BookStore,
};

pub const BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let created = self.store.create(book).await?;
        tracing::info!(id = %created.id, title = %created.title, "Book created");
        Ok(created)
    }

    /// Every book in the store, with its count
    pub async fn list(&self) -> AppResult<BookList> {
        Ok(BookList::from(self.store.list().await?))
    }

    pub async fn get(&self, id: BookId) -> AppResult<Book> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    pub async fn update(&self, id: BookId, book: &NewBook) -> AppResult<Book> {
        let updated = self
            .store
            .update(id, book)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;
        tracing::info!(%id, "Book updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: BookId) -> AppResult<()> {
        self.store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;
        tracing::info!(%id, "Book deleted");
        Ok(())
    }

    /// Check that the record store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
