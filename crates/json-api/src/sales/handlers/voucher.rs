//! Sale Voucher Handler

use std::sync::Arc;

use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use market_app::{
    domain::{sales::records::SaleRecord, users::UsersServiceError},
    vouchers::VoucherFormat,
};

use crate::{extensions::*, sales::errors::into_status_error, state::State};

/// Printed when the cashier account no longer exists.
const UNKNOWN_CASHIER: &str = "-";

/// Sale Voucher Handler
///
/// Renders the sale as a PDF download. `format=thermal` selects the 80 mm
/// roll layout.
#[endpoint(
    tags("sales"),
    summary = "Download Sale Voucher",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "PDF voucher"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown voucher format"),
        (status_code = StatusCode::NOT_FOUND, description = "Sale not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Voucher rendering failed"),
    ),
)]
pub(crate) async fn handler(
    sale: PathParam<Uuid>,
    format: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let format = format
        .into_inner()
        .as_deref()
        .unwrap_or_default()
        .parse::<VoucherFormat>()
        .or_400("Unknown voucher format")?;

    let sale = state
        .app
        .sales
        .get_sale(sale.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let cashier = cashier_name(state, &sale).await?;

    let client = match sale.client_uuid {
        Some(client) => Some(
            state
                .app
                .clients
                .get_client(client)
                .await
                .or_500("failed to load sale client")?,
        ),
        None => None,
    };

    let pdf = state
        .vouchers
        .render(&sale, client.as_ref(), &cashier, format)
        .or_500("failed to render voucher")?;

    res.add_header(CONTENT_TYPE, "application/pdf", true)
        .or_500("failed to set content type header")?
        .add_header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", format.filename(sale.uuid)),
            true,
        )
        .or_500("failed to set content disposition header")?
        .write_body(pdf)
        .or_500("failed to write voucher body")?;

    Ok(())
}

async fn cashier_name(state: &State, sale: &SaleRecord) -> Result<String, StatusError> {
    match state.app.users.get_user(sale.user_uuid).await {
        Ok(user) => Ok(user.username),
        Err(UsersServiceError::NotFound) => Ok(UNKNOWN_CASHIER.to_string()),
        Err(error) => Err(error).or_500("failed to load sale cashier"),
    }
}
