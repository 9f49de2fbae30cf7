//! Sale Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, sales::get::SaleResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesResponse {
    /// Non-cancelled sales, newest first
    pub sales: Vec<SaleResponse>,
}

/// Sale Index Handler
#[endpoint(
    tags("sales"),
    summary = "List Sales",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SalesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sales = state
        .app
        .sales
        .list_sales()
        .await
        .or_500("failed to fetch sales")?;

    Ok(Json(SalesResponse {
        sales: sales.into_iter().map(Into::into).collect(),
    }))
}
