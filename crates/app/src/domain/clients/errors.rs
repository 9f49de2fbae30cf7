//! Clients service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::sql_errors::SqlFailure;

#[derive(Debug, Error)]
pub enum ClientsServiceError {
    /// A client with the same national ID is already registered.
    #[error("client already exists")]
    AlreadyExists,

    #[error("client not found")]
    NotFound,

    #[error("client name is required")]
    MissingName,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ClientsServiceError {
    fn from(error: Error) -> Self {
        match SqlFailure::from(error) {
            SqlFailure::NotFound => Self::NotFound,
            SqlFailure::UniqueViolation => Self::AlreadyExists,
            SqlFailure::NotNullViolation => Self::MissingName,
            SqlFailure::ForeignKeyViolation | SqlFailure::CheckViolation => Self::InvalidData,
            SqlFailure::Other(error) => Self::Sql(error),
        }
    }
}
