use models::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("item with id {0} already exists")]
    DuplicateIdentifier(i64),
}
