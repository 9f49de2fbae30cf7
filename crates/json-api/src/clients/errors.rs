//! Client Errors

use salvo::http::StatusError;
use tracing::error;

use market_app::domain::clients::ClientsServiceError;

pub(crate) fn into_status_error(error: ClientsServiceError) -> StatusError {
    match error {
        ClientsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A client with this national ID already exists")
        }
        ClientsServiceError::NotFound => StatusError::not_found().brief("Client not found"),
        ClientsServiceError::MissingName => {
            StatusError::bad_request().brief("Client name is required")
        }
        ClientsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid client payload")
        }
        ClientsServiceError::Sql(source) => {
            error!("client storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
