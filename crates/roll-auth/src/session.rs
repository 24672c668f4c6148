//! Explicit session context.
//!
//! The credential is read from the token store once, when the session is
//! built, and then handed to every API call through [`Session::bearer`].
//! Nothing else in the workspace touches the store for reads.

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::token_store::{self, TokenSource};

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    source: Option<TokenSource>,
}

impl Session {
    /// Build a session from the persistent token store.
    #[must_use]
    pub fn load() -> Self {
        match token_store::load() {
            Some((token, source)) => {
                tracing::debug!(%source, "loaded stored credential");
                let session = Self {
                    token: Some(token),
                    source: Some(source),
                };
                session.warn_if_expired();
                session
            }
            None => Self::anonymous(),
        }
    }

    /// A session with no credential. Protected actions will be refused.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session around a token obtained in-process.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            return Self::anonymous();
        }
        Self {
            token: Some(token),
            source: Some(TokenSource::Explicit),
        }
    }

    /// The single credential accessor.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The credential, or `NotAuthenticated`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when no credential is present.
    pub fn require(&self) -> Result<&str, AuthError> {
        self.bearer().ok_or(AuthError::NotAuthenticated)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub const fn source(&self) -> Option<TokenSource> {
        self.source
    }

    /// Unverified claims, if the credential is a decodable JWT.
    #[must_use]
    pub fn claims(&self) -> Option<TokenClaims> {
        self.bearer().and_then(|t| TokenClaims::decode(t).ok())
    }

    fn warn_if_expired(&self) {
        if let Some(claims) = self.claims()
            && claims.is_expired()
        {
            tracing::warn!(
                expires_at = ?claims.expires_at,
                "stored credential has expired; run `roll auth login`"
            );
        }
    }
}
