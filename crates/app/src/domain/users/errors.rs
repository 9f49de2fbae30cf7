//! Users service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::sql_errors::SqlFailure;

/// User service error variants.
#[derive(Debug, Error)]
pub enum UsersServiceError {
    /// Username is already taken.
    #[error("user already exists")]
    AlreadyExists,

    /// User was not found.
    #[error("user not found")]
    NotFound,

    /// Username was empty.
    #[error("invalid data")]
    InvalidData,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        match SqlFailure::from(error) {
            SqlFailure::NotFound => Self::NotFound,
            SqlFailure::UniqueViolation => Self::AlreadyExists,
            SqlFailure::NotNullViolation | SqlFailure::CheckViolation => Self::InvalidData,
            SqlFailure::ForeignKeyViolation => Self::NotFound,
            SqlFailure::Other(error) => Self::Sql(error),
        }
    }
}
