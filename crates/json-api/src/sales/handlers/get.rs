//! Get Sale Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use market_app::domain::sales::records::{SaleLineRecord, SaleRecord};

use crate::{extensions::*, sales::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaleLineResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,

    /// Product name at the time of sale
    pub product_name: String,

    pub quantity: u64,

    /// Prices copied from the product at checkout, in minor units
    pub purchase_price: u64,
    pub sale_price: u64,

    pub tax: u64,
}

impl From<SaleLineRecord> for SaleLineResponse {
    fn from(line: SaleLineRecord) -> Self {
        SaleLineResponse {
            uuid: line.uuid.into(),
            product_uuid: line.product_uuid.into(),
            product_name: line.product_name,
            quantity: line.quantity,
            purchase_price: line.purchase_price,
            sale_price: line.sale_price,
            tax: line.tax,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaleResponse {
    pub uuid: Uuid,

    /// Units sold
    pub count: u64,

    /// Total in minor currency units
    pub amount: u64,

    pub invoice_type: String,
    pub payment_type: String,
    pub user_uuid: Uuid,
    pub client_uuid: Option<Uuid>,
    pub closed: bool,
    pub cancelled: bool,

    /// Empty in list responses
    pub lines: Vec<SaleLineResponse>,

    pub created_at: String,
}

impl From<SaleRecord> for SaleResponse {
    fn from(sale: SaleRecord) -> Self {
        SaleResponse {
            uuid: sale.uuid.into(),
            count: sale.count,
            amount: sale.amount,
            invoice_type: sale.invoice_type.to_string(),
            payment_type: sale.payment_type.to_string(),
            user_uuid: sale.user_uuid.into(),
            client_uuid: sale.client_uuid.map(Into::into),
            closed: sale.closed,
            cancelled: sale.cancelled,
            lines: sale.lines.into_iter().map(Into::into).collect(),
            created_at: sale.created_at.to_string(),
        }
    }
}

/// Get Sale Handler
#[endpoint(
    tags("sales"),
    summary = "Get Sale",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Sale with its lines"),
        (status_code = StatusCode::NOT_FOUND, description = "Sale not found"),
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
        .get_sale(sale.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(sale.into()))
}
