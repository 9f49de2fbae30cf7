//! Checkout Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    products::records::ProductUuid, sql_errors::try_get_amount, users::records::UserUuid,
};

const LOCK_CART_ENTRIES_SQL: &str = include_str!("../sql/lock_cart_entries.sql");

/// A cart entry joined with the product fields a sale line copies.
#[derive(Debug, Clone)]
pub(crate) struct CheckoutEntry {
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub quantity: u64,
    pub purchase_price: u64,
    pub sale_price: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCheckoutRepository;

impl PgCheckoutRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Read the user's cart, holding row locks until the transaction ends.
    pub(crate) async fn lock_cart_entries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<CheckoutEntry>, sqlx::Error> {
        query_as::<Postgres, CheckoutEntry>(LOCK_CART_ENTRIES_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CheckoutEntry {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            product_name: row.try_get("product_name")?,
            quantity: try_get_amount(row, "quantity")?,
            purchase_price: try_get_amount(row, "purchase_price")?,
            sale_price: try_get_amount(row, "sale_price")?,
        })
    }
}
