//! Persistence layer for book records.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, BookDraft},
};

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

/// Persistence contract for book records, polymorphic over the backing
/// storage. Every mutating call is atomic with respect to a single record:
/// a caller never observes a partially-applied book.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, in primary-key order.
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// Look up a single book. `Ok(None)` when the id is unknown.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Persist a new record. The store assigns the id.
    async fn insert(&self, draft: &BookDraft) -> AppResult<Book>;

    /// Overwrite all mutable fields of an existing record.
    /// `AppError::NotFound` when the id is unknown.
    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Hard-delete a record. `AppError::NotFound` when the id is unknown.
    async fn delete(&self, id: i32) -> AppResult<()>;
}
