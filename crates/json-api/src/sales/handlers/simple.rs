//! Simple Checkout Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use market_app::domain::sales::{data::NewSale, records::SaleUuid};

use crate::{
    extensions::*,
    observability,
    sales::{errors::into_status_error, get::SaleResponse},
    state::State,
};

/// Simple Checkout Handler
///
/// Closes the cart as an unissued cash sale with no client.
#[endpoint(
    tags("sales"),
    summary = "Checkout Without Voucher",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Sale created"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart is empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SaleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let sale = state
        .app
        .sales
        .checkout(user, NewSale::simple(SaleUuid::new()))
        .await
        .map_err(into_status_error)?;

    observability::record_checkout();

    res.add_header(LOCATION, format!("/sales/{}", sale.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(sale.into()))
}
