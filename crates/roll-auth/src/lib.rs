//! # roll-auth
//!
//! Credential handling for the rollcall client.
//!
//! The bearer token is created at login, persisted in the OS keychain
//! (`keyring`) with an env var and file fallback, and read once into an
//! explicit [`Session`] that is passed to every API call. Nothing in the
//! client refreshes the token.

pub mod claims;
pub mod error;
pub mod session;
pub mod token_store;

pub use claims::TokenClaims;
pub use error::AuthError;
pub use session::Session;
pub use token_store::TokenSource;

/// Persist a token obtained from login or impersonation.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if both keyring and file storage fail.
pub fn store_token(token: &str) -> Result<(), AuthError> {
    token_store::store(token)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
