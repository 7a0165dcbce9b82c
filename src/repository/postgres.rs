//! PostgreSQL-backed book store.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDraft},
    repository::BookStore,
};

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, publication_year, isbn FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, publication_year, isbn FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn insert(&self, draft: &BookDraft) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, publication_year, isbn)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, publication_year, isbn
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.publication_year)
        .bind(&draft.isbn)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        // Single statement, so the row is never observed half-written
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $2, author = $3, publication_year = $4, isbn = $5
            WHERE id = $1
            RETURNING id, title, author, publication_year, isbn
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.publication_year)
        .bind(&book.isbn)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
