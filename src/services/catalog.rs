//! Catalog management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDraft, BookPayload},
    repository::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// List every book in the catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.store.find_all().await
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.store.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// Validate the payload and create a new book. The store assigns the id.
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        let draft = BookDraft::try_from(payload).map_err(AppError::Validation)?;
        self.store.insert(&draft).await
    }

    /// Replace all mutable fields of an existing book.
    /// Existence is checked before validation, so an unknown id reports
    /// 404 even when the payload is invalid.
    pub async fn update_book(&self, id: i32, payload: BookPayload) -> AppResult<Book> {
        let existing = self.store.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let draft = BookDraft::try_from(payload).map_err(AppError::Validation)?;
        self.store.update(&draft.with_id(existing.id)).await
    }

    /// Delete a book. Deleting an absent id is an error, not a no-op.
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.store.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        self.store.delete(id).await
    }
}
