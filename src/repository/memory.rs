//! In-memory book store.
//!
//! Backs the integration tests and is usable as a throwaway store for local
//! experiments. Ids are assigned from a monotonically increasing counter,
//! so listing order matches insertion order like the SERIAL column does.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDraft},
    repository::BookStore,
};

#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Shelf>,
}

#[derive(Default)]
struct Shelf {
    books: BTreeMap<i32, Book>,
    next_id: i32,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let shelf = self.inner.read().await;
        Ok(shelf.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let shelf = self.inner.read().await;
        Ok(shelf.books.get(&id).cloned())
    }

    async fn insert(&self, draft: &BookDraft) -> AppResult<Book> {
        let mut shelf = self.inner.write().await;
        shelf.next_id += 1;
        let book = draft.clone().with_id(shelf.next_id);
        shelf.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        let mut shelf = self.inner.write().await;
        if !shelf.books.contains_key(&book.id) {
            return Err(AppError::NotFound);
        }
        shelf.books.insert(book.id, book.clone());
        Ok(book.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut shelf = self.inner.write().await;
        if shelf.books.remove(&id).is_none() {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
