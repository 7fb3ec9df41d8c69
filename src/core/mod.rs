//! Core types shared across the service

pub mod error;
pub mod query;

pub use error::ApiError;
pub use query::{ListParams, SearchParams};
