//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use market_app::domain::carts::records::{Cart, CartItemRecord};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// A single cart entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub barcode: String,
    pub product_name: String,

    /// Current shelf price in minor currency units
    pub sale_price: u64,

    pub quantity: u64,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        CartItemResponse {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            barcode: item.barcode,
            product_name: item.product_name,
            sale_price: item.sale_price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub items: Vec<CartItemResponse>,

    /// Units across all entries
    pub total_count: u64,

    /// Sum of quantity times price, in minor currency units
    pub total_amount: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            items: cart.items.into_iter().map(Into::into).collect(),
            total_count: cart.total_count,
            total_amount: cart.total_amount,
        }
    }
}

/// Get Cart Handler
///
/// Returns the authenticated user's pending cart.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
