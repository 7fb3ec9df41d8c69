//! Authorization gate for protected routes
//!
//! The gate validates the raw `Authorization` header against the token
//! store before a handler touches the book collection. It is a pure gate:
//! the resolved identity is returned but never used for scoping, so all
//! authenticated callers see the same global collection.

use crate::auth::token::TokenStore;
use crate::core::ApiError;
use axum::http::{HeaderMap, header};
use tracing::warn;

/// Resolve the caller's identity from the `Authorization` header
///
/// The header carries the raw token with no scheme prefix. Fails with
/// [`ApiError::Unauthorized`] when the header is missing or the token was
/// never issued.
pub fn authorize(headers: &HeaderMap, tokens: &TokenStore) -> Result<String, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    match tokens.resolve(token)? {
        Some(identity) => Ok(identity),
        None => {
            warn!("rejected request with unknown token");
            Err(ApiError::Unauthorized)
        }
    }
}
