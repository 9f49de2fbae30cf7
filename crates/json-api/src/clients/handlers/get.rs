//! Get Client Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use market_app::domain::clients::records::ClientRecord;

use crate::{clients::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientResponse {
    pub uuid: Uuid,
    pub name: String,
    pub surname: String,

    /// Absent for clients registered without one
    pub national_id: Option<String>,

    pub phone: String,
    pub email: String,
    pub created_at: String,
}

impl From<ClientRecord> for ClientResponse {
    fn from(client: ClientRecord) -> Self {
        ClientResponse {
            uuid: client.uuid.into(),
            name: client.name,
            surname: client.surname,
            national_id: client.national_id,
            phone: client.phone,
            email: client.email,
            created_at: client.created_at.to_string(),
        }
    }
}

/// Get Client Handler
#[endpoint(
    tags("clients"),
    summary = "Get Client",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Client found"),
        (status_code = StatusCode::NOT_FOUND, description = "Client not found"),
    ),
)]
pub(crate) async fn handler(
    client: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let client = state
        .app
        .clients
        .get_client(client.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(client.into()))
}
