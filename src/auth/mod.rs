//! Token issuance and request authorization

pub mod gate;
pub mod token;

pub use gate::authorize;
pub use token::TokenStore;
