//! Create Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use market_app::domain::carts::{data::NewCartItem, records::CartItemUuid};

use crate::{
    carts::{errors::into_status_error, get::CartItemResponse},
    extensions::*,
    state::State,
};

const fn default_quantity() -> u64 {
    1
}

/// Create Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartItemRequest {
    /// Identifier for a new entry; generated when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,

    /// Scanned product barcode
    pub barcode: String,

    #[serde(default = "default_quantity")]
    pub quantity: u64,
}

impl From<CreateCartItemRequest> for NewCartItem {
    fn from(request: CreateCartItemRequest) -> Self {
        NewCartItem {
            uuid: request.uuid.map_or_else(CartItemUuid::new, Into::into),
            barcode: request.barcode,
            quantity: request.quantity,
        }
    }
}

/// Create Cart Item Handler
///
/// Scanning a barcode already in the cart adds to that entry.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart entry created or incremented"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let item = state
        .app
        .carts
        .add_item(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
