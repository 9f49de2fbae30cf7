//! Client Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{clients::get::ClientResponse, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientsResponse {
    pub clients: Vec<ClientResponse>,
}

/// Client Index Handler
#[endpoint(
    tags("clients"),
    summary = "List Clients",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ClientsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let clients = state
        .app
        .clients
        .list_clients()
        .await
        .or_500("failed to fetch clients")?;

    Ok(Json(ClientsResponse {
        clients: clients.into_iter().map(Into::into).collect(),
    }))
}
