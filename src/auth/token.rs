//! In-memory token store
//!
//! Maps issued tokens to the identity supplied at login. The mapping is
//! append-only for the process lifetime: tokens are never expired or
//! revoked, and all state is lost on restart.

use crate::core::ApiError;
use anyhow::anyhow;
use rand::RngCore;
use rand::rngs::OsRng;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Number of random bytes per token. 16 bytes = 128 bits of entropy.
const TOKEN_BYTES: usize = 16;

/// Process-wide token -> identity mapping
///
/// Uses RwLock for thread-safe access; clones share the same map.
#[derive(Clone)]
pub struct TokenStore {
    tokens: Arc<RwLock<HashMap<String, String>>>,
}

impl TokenStore {
    /// Create a new, empty token store
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Generate an unguessable token for the given identity and record it
    ///
    /// Never fails for a non-empty identity; the caller is responsible for
    /// rejecting empty identities before issuance.
    pub fn issue(&self, identity: &str) -> Result<String, ApiError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let token: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();

        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        tokens.insert(token.clone(), identity.to_string());

        Ok(token)
    }

    /// Look up the identity a token was issued to
    ///
    /// Pure lookup: no side effects, no expiry check. Returns `None` for any
    /// token that was never issued.
    pub fn resolve(&self, token: &str) -> Result<Option<String>, ApiError> {
        let tokens = self
            .tokens
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tokens.get(token).cloned())
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
