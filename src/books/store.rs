//! In-memory book collection and the queries that read it
//!
//! The store owns the only live set of [`Book`] records. Mutations take the
//! write lock so read-modify-write steps never interleave; id assignment and
//! the append happen in one critical section, so two concurrent creates can
//! never receive the same id. Reads copy a point-in-time snapshot out under
//! the read lock and filter outside it.

use crate::books::model::{Book, BookDraft, BookPatch};
use crate::core::{ApiError, ListParams};
use anyhow::anyhow;
use std::sync::{Arc, RwLock};

/// Interior state guarded by the lock
///
/// `created` counts every book ever created, not the live collection size.
/// The next id is always `created + 1`, so ids are never recycled after a
/// delete.
struct Shelf {
    books: Vec<Book>,
    created: u64,
}

/// Thread-safe, process-wide book collection
///
/// Clones share the same underlying shelf.
#[derive(Clone)]
pub struct BookStore {
    shelf: Arc<RwLock<Shelf>>,
}

impl BookStore {
    /// Create a new, empty book store
    pub fn new() -> Self {
        Self {
            shelf: Arc::new(RwLock::new(Shelf {
                books: Vec::new(),
                created: 0,
            })),
        }
    }

    /// Create a book from the draft, assigning the next monotonic id
    pub fn create(&self, draft: BookDraft) -> Result<Book, ApiError> {
        let mut shelf = self
            .shelf
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        shelf.created += 1;
        let book = Book {
            id: shelf.created,
            title: draft.title,
            author: draft.author,
            publication_year: draft.publication_year,
        };
        shelf.books.push(book.clone());

        Ok(book)
    }

    /// Get a live book by id
    pub fn get(&self, id: u64) -> Result<Option<Book>, ApiError> {
        let shelf = self
            .shelf
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(shelf.books.iter().find(|b| b.id == id).cloned())
    }

    /// Apply a partial update, leaving absent fields unchanged
    ///
    /// Returns `None` when no live book has the given id.
    pub fn update(&self, id: u64, patch: BookPatch) -> Result<Option<Book>, ApiError> {
        let mut shelf = self
            .shelf
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(book) = shelf.books.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author) = patch.author {
            book.author = author;
        }
        if let Some(year) = patch.publication_year {
            book.publication_year = year;
        }

        Ok(Some(book.clone()))
    }

    /// Remove the book with the given id if present
    ///
    /// Deleting an absent id is a silent no-op; the id is never reassigned.
    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        let mut shelf = self
            .shelf
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        shelf.books.retain(|b| b.id != id);

        Ok(())
    }

    /// All live books in insertion order, as a point-in-time snapshot
    pub fn snapshot(&self) -> Result<Vec<Book>, ApiError> {
        let shelf = self
            .shelf
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(shelf.books.clone())
    }

    /// Filter and paginate the collection
    ///
    /// Title and author filters are case-insensitive substring matches,
    /// composed with AND. An out-of-range page yields an empty vec, never
    /// an error.
    pub fn list(&self, params: &ListParams) -> Result<Vec<Book>, ApiError> {
        let snapshot = self.snapshot()?;
        let filtered = apply_filters(snapshot, params.title.as_deref(), params.author.as_deref());
        Ok(paginate(filtered, params.page(), params.per_page()))
    }

    /// Case-insensitive substring search on the title across the full snapshot
    ///
    /// An empty query is a bad request; an empty result set is a success.
    pub fn search(&self, query: &str) -> Result<Vec<Book>, ApiError> {
        if query.is_empty() {
            return Err(ApiError::bad_request("Empty query"));
        }

        let needle = query.to_lowercase();
        let snapshot = self.snapshot()?;
        Ok(snapshot
            .into_iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .collect())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Retain books matching the title and author filters (AND-composed)
fn apply_filters(books: Vec<Book>, title: Option<&str>, author: Option<&str>) -> Vec<Book> {
    let title = title.map(str::to_lowercase);
    let author = author.map(str::to_lowercase);

    books
        .into_iter()
        .filter(|b| {
            title
                .as_deref()
                .is_none_or(|t| b.title.to_lowercase().contains(t))
                && author
                    .as_deref()
                    .is_none_or(|a| b.author.to_lowercase().contains(a))
        })
        .collect()
}

/// Skip `(page - 1) * per_page` books and take up to `per_page`
///
/// The offset is computed with checked arithmetic; a page large enough to
/// overflow is past the end of any collection and yields an empty vec.
fn paginate(books: Vec<Book>, page: usize, per_page: usize) -> Vec<Book> {
    let Some(skip) = (page - 1).checked_mul(per_page) else {
        return Vec::new();
    };

    books.into_iter().skip(skip).take(per_page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, author: &str, year: i32) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            publication_year: year,
        }
    }

    fn seeded() -> BookStore {
        let store = BookStore::new();
        store.create(draft("Sample Book", "Jane Doe", 2020)).unwrap();
        store.create(draft("Another Story", "John Roe", 2021)).unwrap();
        store
            .create(draft("A Very Long and Unique Title", "Jane Doe", 2022))
            .unwrap();
        store
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = BookStore::new();
        let first = store.create(draft("A", "X", 2000)).unwrap();
        let second = store.create(draft("B", "Y", 2001)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_ids_are_never_recycled_after_delete() {
        let store = BookStore::new();
        let first = store.create(draft("A", "X", 2000)).unwrap();
        store.delete(first.id).unwrap();

        let second = store.create(draft("B", "Y", 2001)).unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_get_returns_live_book() {
        let store = seeded();
        let book = store.get(1).unwrap().unwrap();
        assert_eq!(book.title, "Sample Book");

        assert!(store.get(99).unwrap().is_none());
    }

    #[test]
    fn test_update_changes_only_supplied_fields() {
        let store = seeded();
        let patch = BookPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };

        let updated = store.update(1, patch).unwrap().unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.author, "Jane Doe");
        assert_eq!(updated.publication_year, 2020);
    }

    #[test]
    fn test_update_absent_id_is_none() {
        let store = seeded();
        assert!(store.update(99, BookPatch::default()).unwrap().is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = seeded();
        store.delete(2).unwrap();
        store.delete(2).unwrap();

        assert!(store.get(2).unwrap().is_none());
        assert_eq!(store.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let store = seeded();
        let titles: Vec<String> = store
            .snapshot()
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();

        assert_eq!(
            titles,
            vec!["Sample Book", "Another Story", "A Very Long and Unique Title"]
        );
    }

    #[test]
    fn test_list_defaults_return_all_in_order() {
        let store = seeded();
        let books = store.list(&ListParams::default()).unwrap();

        assert_eq!(books.len(), 3);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[2].id, 3);
    }

    #[test]
    fn test_list_title_filter_is_case_insensitive_substring() {
        let store = seeded();
        let params = ListParams {
            title: Some("sample".to_string()),
            ..Default::default()
        };

        let books = store.list(&params).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Sample Book");
    }

    #[test]
    fn test_list_filters_compose_with_and() {
        let store = seeded();
        let params = ListParams {
            title: Some("title".to_string()),
            author: Some("jane".to_string()),
            ..Default::default()
        };

        let books = store.list(&params).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 3);
    }

    #[test]
    fn test_list_pagination_splits_pages() {
        let store = seeded();
        let page1 = store
            .list(&ListParams {
                page: 1,
                per_page: 2,
                ..Default::default()
            })
            .unwrap();
        let page2 = store
            .list(&ListParams {
                page: 2,
                per_page: 2,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(page1.len(), 2);
        assert_eq!(page2.len(), 1);
        assert_eq!(page2[0].id, 3);
    }

    #[test]
    fn test_list_out_of_range_page_is_empty() {
        let store = seeded();
        let params = ListParams {
            page: 99,
            per_page: 10,
            ..Default::default()
        };

        assert!(store.list(&params).unwrap().is_empty());
    }

    #[test]
    fn test_list_huge_page_is_empty_not_an_overflow() {
        let store = seeded();
        let params = ListParams {
            page: usize::MAX,
            per_page: 2,
            ..Default::default()
        };

        assert!(store.list(&params).unwrap().is_empty());
    }

    #[test]
    fn test_list_page_past_offset_overflow_leaks_nothing() {
        let store = seeded();
        let params = ListParams {
            page: (1usize << 63) + 1,
            per_page: 2,
            ..Default::default()
        };

        assert!(store.list(&params).unwrap().is_empty());
    }

    #[test]
    fn test_search_empty_query_is_bad_request() {
        let store = seeded();
        assert!(matches!(
            store.search(""),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_search_no_match_is_empty_success() {
        let store = seeded();
        assert!(store.search("nonexistent").unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_title_substring() {
        let store = seeded();
        let books = store.search("Unique").unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "A Very Long and Unique Title");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = seeded();
        let books = store.search("unique").unwrap();
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn test_search_only_evaluates_title() {
        let store = seeded();
        // "Jane Doe" appears only in author fields
        assert!(store.search("Jane Doe").unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_creates_never_share_ids() {
        let store = BookStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| {
                            store
                                .create(draft(&format!("B{}-{}", i, j), "A", 2000))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let created = ids.len();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), created);
        assert_eq!(*ids.last().unwrap(), created as u64);
    }
}
