//! Sale Errors

use salvo::http::StatusError;
use tracing::error;

use market_app::domain::sales::SalesServiceError;

pub(crate) fn into_status_error(error: SalesServiceError) -> StatusError {
    match error {
        SalesServiceError::EmptyCart => StatusError::unprocessable_entity().brief("Cart is empty"),
        SalesServiceError::NotFound => StatusError::not_found().brief("Sale not found"),
        SalesServiceError::AlreadyCancelled => {
            StatusError::conflict().brief("Sale is already cancelled")
        }
        SalesServiceError::AlreadyExists => StatusError::conflict().brief("Sale already exists"),
        SalesServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown client")
        }
        SalesServiceError::InvalidData => StatusError::bad_request().brief("Invalid sale payload"),
        SalesServiceError::Sql(source) => {
            error!("sale storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
