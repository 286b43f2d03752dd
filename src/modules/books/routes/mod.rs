//! HTTP handlers for the books module.
//!
//! The same handlers back two route sets: the module set mounted under
//! `/api/books` and the flat `/books` + `/book/{book_id}` set at the root.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bookstore_http::{
    error::AppError,
    extract::{ApiJson, ApiPath},
};

use super::models::{Book, BookId, BookUpdate};
use super::store::{BookStore, StoreError};

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::not_found(err.to_string()),
        }
    }
}

/// Routes mounted under `/api/books`.
pub fn api_router(store: Arc<BookStore>) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/health", get(health_check))
        .route(
            "/{book_id}",
            get(get_book).patch(update_book).delete(delete_book),
        )
        .with_state(store)
}

/// Flat routes served at the server root.
pub fn root_router(store: Arc<BookStore>) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/book/{book_id}",
            get(get_book).patch(update_book).delete(delete_book),
        )
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "books module is healthy"
}

async fn list_books(State(store): State<Arc<BookStore>>) -> Json<Vec<Book>> {
    Json(store.list())
}

async fn create_book(
    State(store): State<Arc<BookStore>>,
    ApiJson(book): ApiJson<Book>,
) -> (StatusCode, Json<Book>) {
    let created = store.create(book);
    tracing::info!(book_id = created.id, "book created");
    (StatusCode::CREATED, Json(created))
}

async fn get_book(
    State(store): State<Arc<BookStore>>,
    ApiPath(book_id): ApiPath<BookId>,
) -> Result<Json<Book>, AppError> {
    Ok(Json(store.get(book_id)?))
}

async fn update_book(
    State(store): State<Arc<BookStore>>,
    ApiPath(book_id): ApiPath<BookId>,
    ApiJson(update): ApiJson<BookUpdate>,
) -> Result<Json<Book>, AppError> {
    let updated = store.update(book_id, update)?;
    tracing::info!(book_id, "book updated");
    Ok(Json(updated))
}

async fn delete_book(
    State(store): State<Arc<BookStore>>,
    ApiPath(book_id): ApiPath<BookId>,
) -> Result<StatusCode, AppError> {
    store.delete(book_id)?;
    tracing::info!(book_id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
