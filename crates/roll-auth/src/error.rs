use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication required: no stored credential (run `roll auth login`)")]
    NotAuthenticated,

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("malformed token: {0}")]
    MalformedToken(String),
}
