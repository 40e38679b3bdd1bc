use crate::errors::repository::RepositoryError;
use bcrypt::BcryptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token already used")]
    TokenAlreadyUsed,

    #[error("Email delivery failed: {0}")]
    Email(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// True for the reset-token failures that are reported to clients as one
    /// indistinguishable error.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidToken | ServiceError::TokenExpired | ServiceError::TokenAlreadyUsed
        )
    }
}
