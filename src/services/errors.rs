use thiserror::Error;

use crate::domain::types::OrderId;
use crate::repository::errors::RepositoryError;

/// Failures surfaced to callers of the service layer.
///
/// Everything except [`ServiceError::StoreUnavailable`] is caused by the
/// caller's input.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("client id is required")]
    MissingClientId,

    #[error("no client registered with id: {0}")]
    UnknownClient(i64),

    #[error("status is required")]
    MissingStatus,

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("order id is required")]
    MissingOrderId,

    #[error("order not found: {0}")]
    UnknownOrder(OrderId),

    #[error("client not found: {0}")]
    ClientNotFound(i64),

    #[error("form error: {0}")]
    Form(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid value: {0}")]
    TypeConstraint(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            // Stored rows that fail to decode are a store fault, not bad input.
            other => ServiceError::StoreUnavailable(other.to_string()),
        }
    }
}
