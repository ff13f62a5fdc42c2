//! In-process book store, insertion ordered

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, BookId, NewBook},
};

#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<IndexMap<Uuid, Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get(&self, id: BookId) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(&id.as_uuid()).cloned())
    }

    async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let now = Utc::now();
        let created = Book {
            id: Uuid::new_v4(),
            title: book.title.clone(),
            author: book.author.clone(),
            publish_year: book.publish_year,
            created_at: now,
            updated_at: now,
        };
        self.books.write().await.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: BookId, book: &NewBook) -> AppResult<Option<Book>> {
        let mut books = self.books.write().await;
        let Some(existing) = books.get_mut(&id.as_uuid()) else {
            return Ok(None);
        };
        existing.title = book.title.clone();
        existing.author = book.author.clone();
        existing.publish_year = book.publish_year;
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: BookId) -> AppResult<Option<Book>> {
        // shift_remove keeps the remaining books in creation order
        Ok(self.books.write().await.shift_remove(&id.as_uuid()))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> NewBook {
        NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            publish_year: 1965,
        }
    }

    #[test]
    fn test_create_then_get() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();
            let created = store.create(&dune()).await.unwrap();
            let fetched = store.get(BookId::from(&created)).await.unwrap();
            assert_eq!(fetched, Some(created));
        });
    }

    #[test]
    fn test_list_keeps_creation_order() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();
            let first = store.create(&dune()).await.unwrap();
            let mut other = dune();
            other.title = "Children of Dune".to_string();
            let second = store.create(&other).await.unwrap();
            let third = store.create(&dune()).await.unwrap();

            store.delete(BookId::from(&second)).await.unwrap();

            let ids: Vec<Uuid> = store.list().await.unwrap().iter().map(|b| b.id).collect();
            assert_eq!(ids, vec![first.id, third.id]);
        });
    }

    #[test]
    fn test_update_missing_returns_none() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();
            let result = store.update(BookId::new(Uuid::new_v4()), &dune()).await.unwrap();
            assert!(result.is_none());
            assert!(store.list().await.unwrap().is_empty());
        });
    }

    #[test]
    fn test_update_replaces_fields() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();
            let created = store.create(&dune()).await.unwrap();
            let mut changed = dune();
            changed.title = "Dune: New Edition".to_string();

            let updated = store
                .update(BookId::from(&created), &changed)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(updated.id, created.id);
            assert_eq!(updated.title, "Dune: New Edition");
            assert_eq!(updated.created_at, created.created_at);
            assert!(updated.updated_at >= created.updated_at);
        });
    }

    #[test]
    fn test_delete_twice() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();
            let created = store.create(&dune()).await.unwrap();
            let id = BookId::from(&created);
            assert_eq!(store.delete(id).await.unwrap(), Some(created));
            assert_eq!(store.delete(id).await.unwrap(), None);
            assert_eq!(store.get(id).await.unwrap(), None);
        });
    }
}
