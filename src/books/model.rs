//! Data model for the book catalog

use serde::{Deserialize, Serialize};

/// A book record held in the in-memory collection
///
/// Ids are positive, unique, and assigned once at creation from a monotonic
/// counter; they are never reused, even after deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

/// Payload for creating a book; all fields are required
///
/// A missing field is a decode failure and surfaces as a 400 response,
/// never a crash.
#[derive(Debug, Clone, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

/// Partial update for a book: one optional slot per mutable field
///
/// Absent fields leave the record untouched. Unknown keys are dropped by
/// the typed structure instead of attaching new attributes to the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<i32>,
}

/// A library member
///
/// Declared for data-model completeness; no endpoint operates on members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub email: String,
}
