//! Sale Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    products::records::ProductUuid,
    sales::records::{SaleLineRecord, SaleLineUuid, SaleUuid},
    sql_errors::{encode_amount, try_get_amount},
};

use super::CheckoutEntry;

const CREATE_SALE_LINE_SQL: &str = include_str!("../sql/create_sale_line.sql");
const GET_SALE_LINES_SQL: &str = include_str!("../sql/get_sale_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSaleLinesRepository;

impl PgSaleLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_sale_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: SaleUuid,
        entry: &CheckoutEntry,
    ) -> Result<SaleLineRecord, sqlx::Error> {
        query_as::<Postgres, SaleLineRecord>(CREATE_SALE_LINE_SQL)
            .bind(SaleLineUuid::new().into_uuid())
            .bind(sale.into_uuid())
            .bind(entry.product_uuid.into_uuid())
            .bind(&entry.product_name)
            .bind(encode_amount(entry.quantity, "quantity")?)
            .bind(encode_amount(entry.purchase_price, "purchase_price")?)
            .bind(encode_amount(entry.sale_price, "sale_price")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_sale_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: SaleUuid,
    ) -> Result<Vec<SaleLineRecord>, sqlx::Error> {
        query_as::<Postgres, SaleLineRecord>(GET_SALE_LINES_SQL)
            .bind(sale.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SaleLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SaleLineUuid::from_uuid(row.try_get("uuid")?),
            sale_uuid: SaleUuid::from_uuid(row.try_get("sale_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            product_name: row.try_get("product_name")?,
            quantity: try_get_amount(row, "quantity")?,
            purchase_price: try_get_amount(row, "purchase_price")?,
            sale_price: try_get_amount(row, "sale_price")?,
            tax: try_get_amount(row, "tax")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
