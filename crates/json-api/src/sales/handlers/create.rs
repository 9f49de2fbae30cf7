//! Checkout Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use market_app::domain::sales::{
    data::{InvoiceType, NewSale, PaymentType},
    records::SaleUuid,
};

use crate::{
    extensions::*,
    observability,
    sales::{errors::into_status_error, get::SaleResponse},
    state::State,
};

/// Checkout Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,

    /// `receipt`, `invoice` or `unissued` (default)
    #[serde(default)]
    pub invoice_type: Option<String>,

    /// `cash` (default), `card` or `transfer`
    #[serde(default)]
    pub payment_type: Option<String>,

    #[serde(default)]
    pub client_uuid: Option<Uuid>,
}

impl TryFrom<CheckoutRequest> for NewSale {
    type Error = StatusError;

    fn try_from(request: CheckoutRequest) -> Result<Self, Self::Error> {
        let invoice_type = request
            .invoice_type
            .as_deref()
            .map(str::parse::<InvoiceType>)
            .transpose()
            .or_400("Unknown invoice type")?
            .unwrap_or_default();

        let payment_type = request
            .payment_type
            .as_deref()
            .map(str::parse::<PaymentType>)
            .transpose()
            .or_400("Unknown payment type")?
            .unwrap_or_default();

        Ok(NewSale {
            uuid: request.uuid.map_or_else(SaleUuid::new, Into::into),
            invoice_type,
            payment_type,
            client_uuid: request.client_uuid.map(Into::into),
        })
    }
}

/// Checkout Handler
///
/// Closes the cart into a sale. The `Location` header points at the
/// sale's voucher.
#[endpoint(
    tags("sales"),
    summary = "Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Sale created"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart is empty"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown client or bad payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "sales.checkout",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        sale_uuid = tracing::field::Empty,
        invoice_type = tracing::field::Empty,
        payment_type = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SaleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let new_sale = NewSale::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("sale_uuid", tracing::field::display(new_sale.uuid));
    span.record("invoice_type", new_sale.invoice_type.as_str());
    span.record("payment_type", new_sale.payment_type.as_str());

    let sale = state
        .app
        .sales
        .checkout(user, new_sale)
        .await
        .map_err(into_status_error)?;

    observability::record_checkout();

    res.add_header(LOCATION, format!("/sales/{}/voucher", sale.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(sale.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use market_app::domain::{
        clients::records::ClientUuid,
        sales::{MockSalesService, SalesServiceError},
    };

    use crate::test_helpers::{TEST_USER_UUID, TestState, make_sale};

    use super::*;

    fn make_service(sales: MockSalesService) -> Service {
        TestState::default()
            .with_sales(sales)
            .service(Router::with_path("sales").post(handler))
    }

    #[tokio::test]
    async fn test_checkout_points_location_at_voucher() -> TestResult {
        let uuid = SaleUuid::new();
        let client = ClientUuid::new();

        let mut sales = MockSalesService::new();

        sales
            .expect_checkout()
            .once()
            .withf(move |user, new| {
                *user == TEST_USER_UUID
                    && *new
                        == NewSale {
                            uuid,
                            invoice_type: InvoiceType::Receipt,
                            payment_type: PaymentType::Card,
                            client_uuid: Some(client),
                        }
            })
            .return_once(move |_, _| Ok(make_sale(uuid)));

        let mut res = TestClient::post("http://example.com/sales")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "invoice_type": "receipt",
                "payment_type": "card",
                "client_uuid": client.into_uuid(),
            }))
            .send(&make_service(sales))
            .await;

        let body: SaleResponse = res.take_json().await?;
        let location = res.headers().get(LOCATION).and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/sales/{uuid}/voucher").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_defaults_to_unissued_cash() -> TestResult {
        let mut sales = MockSalesService::new();

        sales
            .expect_checkout()
            .once()
            .withf(|_, new| {
                new.invoice_type == InvoiceType::Unissued && new.payment_type == PaymentType::Cash
            })
            .return_once(|_, new| Ok(make_sale(new.uuid)));

        let res = TestClient::post("http://example.com/sales")
            .json(&json!({}))
            .send(&make_service(sales))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unknown_payment_type_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/sales")
            .json(&json!({ "payment_type": "barter" }))
            .send(&make_service(MockSalesService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_422() -> TestResult {
        let mut sales = MockSalesService::new();

        sales
            .expect_checkout()
            .once()
            .return_once(|_, _| Err(SalesServiceError::EmptyCart));

        let res = TestClient::post("http://example.com/sales")
            .json(&json!({}))
            .send(&make_service(sales))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unknown_client_returns_400() -> TestResult {
        let mut sales = MockSalesService::new();

        sales
            .expect_checkout()
            .once()
            .return_once(|_, _| Err(SalesServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/sales")
            .json(&json!({ "client_uuid": Uuid::now_v7() }))
            .send(&make_service(sales))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
