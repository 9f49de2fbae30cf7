//! Carts service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::{sales::totals::TotalsOverflow, sql_errors::SqlFailure};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart item not found")]
    NotFound,

    /// No live product carries the scanned barcode.
    #[error("product not found")]
    ProductNotFound,

    #[error("cart item already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        match SqlFailure::from(error) {
            SqlFailure::NotFound => Self::NotFound,
            SqlFailure::UniqueViolation => Self::AlreadyExists,
            SqlFailure::ForeignKeyViolation => Self::InvalidReference,
            SqlFailure::NotNullViolation | SqlFailure::CheckViolation => Self::InvalidData,
            SqlFailure::Other(error) => Self::Sql(error),
        }
    }
}

impl From<TotalsOverflow> for CartsServiceError {
    fn from(_: TotalsOverflow) -> Self {
        Self::InvalidData
    }
}
