//! Sales service errors.

use std::num::TryFromIntError;

use sqlx::Error;
use thiserror::Error;

use crate::domain::{sales::totals::TotalsOverflow, sql_errors::SqlFailure};

#[derive(Debug, Error)]
pub enum SalesServiceError {
    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    #[error("sale not found")]
    NotFound,

    #[error("sale is already cancelled")]
    AlreadyCancelled,

    #[error("sale already exists")]
    AlreadyExists,

    /// The referenced client or product does not exist.
    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SalesServiceError {
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

impl From<TotalsOverflow> for SalesServiceError {
    fn from(_: TotalsOverflow) -> Self {
        Self::InvalidData
    }
}

impl From<TryFromIntError> for SalesServiceError {
    fn from(_: TryFromIntError) -> Self {
        Self::InvalidData
    }
}
