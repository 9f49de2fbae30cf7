//! Classification of storage errors shared by every service error type.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};

/// Coarse category of a failed statement.
#[derive(Debug)]
pub(crate) enum SqlFailure {
    NotFound,
    UniqueViolation,
    ForeignKeyViolation,
    NotNullViolation,
    CheckViolation,
    Other(Error),
}

impl From<Error> for SqlFailure {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::UniqueViolation,
            Some(ErrorKind::ForeignKeyViolation) => Self::ForeignKeyViolation,
            Some(ErrorKind::NotNullViolation) => Self::NotNullViolation,
            Some(ErrorKind::CheckViolation) => Self::CheckViolation,
            _ => Self::Other(error),
        }
    }
}

/// Decode a non-negative `BIGINT` column into an unsigned amount.
pub(crate) fn try_get_amount(row: &sqlx::postgres::PgRow, col: &str) -> Result<u64, Error> {
    use sqlx::Row as _;

    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Encode an unsigned amount for binding to a `BIGINT` parameter.
pub(crate) fn encode_amount(amount: u64, col: &str) -> Result<i64, Error> {
    i64::try_from(amount).map_err(|e| Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
