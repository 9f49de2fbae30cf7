//! Cancel Sale Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    observability,
    sales::{errors::into_status_error, get::SaleResponse},
    state::State,
};

/// Cancel Sale Handler
///
/// Flags the sale as cancelled and returns its units to stock. Lines are kept.
#[endpoint(
    tags("sales"),
    summary = "Cancel Sale",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Sale cancelled"),
        (status_code = StatusCode::NOT_FOUND, description = "Sale not found"),
        (status_code = StatusCode::CONFLICT, description = "Sale already cancelled"),
    ),
)]
pub(crate) async fn handler(
    sale: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<SaleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sale = state
        .app
        .sales
        .cancel_sale(sale.into_inner().into())
        .await
        .map_err(into_status_error)?;

    observability::record_cancellation();

    Ok(Json(sale.into()))
}
