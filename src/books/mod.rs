//! Book catalog: data model and in-memory store

pub mod model;
pub mod store;

pub use model::{Book, BookDraft, BookPatch, Member};
pub use store::BookStore;
