//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, MessageResponse, ValidationErrorResponse},
    models::book::{Book, BookPayload},
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in the catalog", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid payload", body = ValidationErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    payload: Option<Json<BookPayload>>,
) -> AppResult<(StatusCode, Json<Book>)> {
    // A missing or undecodable body validates as an all-absent payload
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let created = state.services.catalog.create_book(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book, replacing all mutable fields
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid payload", body = ValidationErrorResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    payload: Option<Json<BookPayload>>,
) -> AppResult<Json<Book>> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let updated = state.services.catalog.update_book(id, payload).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book(id).await?;
    // 204 forbids a body, so none is sent
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::{
        config::AppConfig,
        error::AppError,
        repository::MockBookStore,
        services::Services,
        AppState,
    };

    use super::*;

    fn app_with_store(store: MockBookStore) -> axum::Router {
        let state = AppState {
            config: Arc::new(AppConfig::default()),
            services: Arc::new(Services::new(Arc::new(store))),
        };
        crate::api::create_router(state)
    }

    #[tokio::test]
    async fn storage_failure_maps_to_500_without_detail() {
        let mut store = MockBookStore::new();
        store
            .expect_find_all()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let response = app_with_store(store)
            .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Internal server error");
    }

    #[tokio::test]
    async fn storage_failure_on_insert_maps_to_500() {
        let mut store = MockBookStore::new();
        store.expect_insert().returning(|_| {
            Err(AppError::Database(sqlx::Error::WorkerCrashed))
        });

        let response = app_with_store(store)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/books")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"title":"Test Book","author":"Test Author","publicationYear":2022,"isbn":"9781234567897"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
