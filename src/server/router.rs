//! Router assembly for the book catalog service
//!
//! Routes:
//! - POST /login - Exchange a user id for a token
//! - POST /books - Add a book (auth)
//! - GET /books - List books with filters and pagination (auth)
//! - GET /books/search - Title substring search (no auth, see handler note)
//! - GET /books/{id} - Get a book (auth)
//! - PUT /books/{id} - Partial update (auth)
//! - DELETE /books/{id} - Delete, idempotent (auth)
//! - GET /health - Liveness probe

use crate::server::handlers::{
    add_book, delete_book, get_book, health_check, list_books, login, search_books, update_book,
    AppState,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the service router with request tracing attached
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/login", post(login))
        .route("/books", post(add_book).get(list_books))
        .route("/books/search", get(search_books))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
