//! Create Client Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use market_app::domain::clients::{data::NewClient, records::ClientUuid};

use crate::{
    clients::{errors::into_status_error, get::ClientResponse},
    extensions::*,
    state::State,
};

/// Create Client Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateClientRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,

    pub name: String,

    #[serde(default)]
    pub surname: String,

    /// Left blank for clients without a document
    #[serde(default)]
    pub national_id: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,
}

impl From<CreateClientRequest> for NewClient {
    fn from(request: CreateClientRequest) -> Self {
        NewClient {
            uuid: request.uuid.map_or_else(ClientUuid::new, Into::into),
            name: request.name,
            surname: request.surname,
            national_id: request.national_id,
            phone: request.phone,
            email: request.email,
        }
    }
}

/// Create Client Handler
#[endpoint(
    tags("clients"),
    summary = "Register Client",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Client registered"),
        (status_code = StatusCode::CONFLICT, description = "National ID already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateClientRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let client = state
        .app
        .clients
        .create_client(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/clients/{}", client.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(client.into()))
}
