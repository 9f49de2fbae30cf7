//! Sales Repository

use std::str::FromStr;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    clients::records::ClientUuid,
    sales::{
        data::NewSale,
        records::{SaleRecord, SaleUuid},
        totals::SaleTotals,
    },
    sql_errors::{encode_amount, try_get_amount},
    users::records::UserUuid,
};

const CREATE_SALE_SQL: &str = include_str!("../sql/create_sale.sql");
const GET_SALE_SQL: &str = include_str!("../sql/get_sale.sql");
const LIST_SALES_SQL: &str = include_str!("../sql/list_sales.sql");
const CANCEL_SALE_SQL: &str = include_str!("../sql/cancel_sale.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSalesRepository;

impl PgSalesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_sale(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        sale: &NewSale,
        totals: SaleTotals,
    ) -> Result<SaleRecord, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(CREATE_SALE_SQL)
            .bind(sale.uuid.into_uuid())
            .bind(encode_amount(totals.count, "count")?)
            .bind(encode_amount(totals.amount, "amount")?)
            .bind(sale.invoice_type.as_str())
            .bind(sale.payment_type.as_str())
            .bind(user.into_uuid())
            .bind(sale.client_uuid.map(ClientUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_sale(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: SaleUuid,
    ) -> Result<SaleRecord, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(GET_SALE_SQL)
            .bind(sale.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_sales(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(LIST_SALES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Flag a live sale as cancelled. `None` when the sale is missing or
    /// was already cancelled.
    pub(crate) async fn cancel_sale(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: SaleUuid,
    ) -> Result<Option<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(CANCEL_SALE_SQL)
            .bind(sale.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

fn try_get_parsed<T>(row: &PgRow, col: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value: String = row.try_get(col)?;

    value.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for SaleRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SaleUuid::from_uuid(row.try_get("uuid")?),
            count: try_get_amount(row, "count")?,
            amount: try_get_amount(row, "amount")?,
            invoice_type: try_get_parsed(row, "invoice_type")?,
            payment_type: try_get_parsed(row, "payment_type")?,
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            client_uuid: row
                .try_get::<Option<Uuid>, _>("client_uuid")?
                .map(ClientUuid::from_uuid),
            closed: row.try_get("closed")?,
            cancelled: row.try_get("cancelled")?,
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
