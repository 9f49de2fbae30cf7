//! Products service errors.

use std::num::TryFromIntError;

use sqlx::Error;
use thiserror::Error;

use crate::domain::sql_errors::SqlFailure;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("invalid price value")]
    InvalidPrice(#[from] TryFromIntError),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        match SqlFailure::from(error) {
            SqlFailure::NotFound => Self::NotFound,
            SqlFailure::UniqueViolation => Self::AlreadyExists,
            SqlFailure::ForeignKeyViolation => Self::InvalidReference,
            SqlFailure::NotNullViolation => Self::MissingRequiredData,
            SqlFailure::CheckViolation => Self::InvalidData,
            SqlFailure::Other(error) => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = ProductsServiceError::from(Error::RowNotFound);

        assert!(matches!(error, ProductsServiceError::NotFound));
    }

    #[test]
    fn oversized_price_maps_to_invalid_price() {
        let error = ProductsServiceError::from(i64::try_from(u64::MAX).unwrap_err());

        assert!(matches!(error, ProductsServiceError::InvalidPrice(_)));
    }
}
