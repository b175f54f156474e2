use pledger_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaoError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    DuplicateKey(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Validation(String),
}

pub type DaoResult<T> = Result<T, DaoError>;

/// Server-assigned opaque identifier for new records.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
