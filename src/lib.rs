//! # libris
//!
//! A small HTTP service exposing authenticated CRUD and search operations
//! over a collection of book records held in process memory.
//!
//! ## Features
//!
//! - **Token login**: POST /login exchanges a user id for an opaque
//!   128-bit token; the raw token goes in the `Authorization` header
//! - **Book CRUD**: create, fetch, partial update, and idempotent delete
//!   over an in-memory collection with monotonic, never-recycled ids
//! - **Filtering & pagination**: case-insensitive substring filters on
//!   title and author, page/per_page windowing
//! - **Title search**: real substring search across the collection
//!
//! All state is volatile and lost on restart. There is no persistence,
//! no token expiry, and no password-based identity.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use libris::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let app = build_router(AppState::new());
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod books;
pub mod config;
pub mod core;
pub mod server;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::auth::{authorize, TokenStore};
    pub use crate::books::{Book, BookDraft, BookPatch, BookStore, Member};
    pub use crate::config::ServerConfig;
    pub use crate::core::{ApiError, ListParams, SearchParams};
    pub use crate::server::{build_router, AppState};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}
