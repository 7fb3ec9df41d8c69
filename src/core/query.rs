//! Query parameters for listing and searching books
//!
//! These structures are extracted from URL query strings. All pagination
//! parameters have defaults; filters are optional.
//!
//! # Example
//! ```rust,ignore
//! // In handler:
//! pub async fn list_books(
//!     Query(params): Query<ListParams>,
//! ) -> Json<Vec<Book>> {
//!     // params.page defaults to 1
//!     // params.per_page defaults to 10
//! }
//!
//! // Usage:
//! GET /books?page=2&per_page=5
//! GET /books?title=rust&author=jane
//! ```

use serde::Deserialize;

/// Query parameters for the book listing endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListParams {
    /// Case-insensitive substring filter on the title
    pub title: Option<String>,

    /// Case-insensitive substring filter on the author
    pub author: Option<String>,

    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of books per page
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    10
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl ListParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get page size, ensuring minimum of 1
    pub fn per_page(&self) -> usize {
        self.per_page.max(1)
    }
}

/// Query parameters for the book search endpoint
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SearchParams {
    /// Title substring to search for; required and non-empty
    pub query: Option<String>,
}
