//! Sale Records

use jiff::Timestamp;

use crate::{
    domain::{
        clients::records::ClientUuid,
        products::records::ProductUuid,
        sales::data::{InvoiceType, PaymentType},
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Sale UUID
pub type SaleUuid = TypedUuid<SaleRecord>;

/// Sale Record
///
/// Immutable after checkout apart from `cancelled`.
#[derive(Debug, Clone)]
pub struct SaleRecord {
    pub uuid: SaleUuid,

    /// Total units sold.
    pub count: u64,

    /// Total charged, in minor currency units.
    pub amount: u64,

    pub invoice_type: InvoiceType,
    pub payment_type: PaymentType,

    /// Issuing user.
    pub user_uuid: UserUuid,

    pub client_uuid: Option<ClientUuid>,
    pub closed: bool,
    pub cancelled: bool,

    /// Empty when loaded by a listing query.
    pub lines: Vec<SaleLineRecord>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Sale Line UUID
pub type SaleLineUuid = TypedUuid<SaleLineRecord>;

/// Sale Line Record
///
/// Name and prices are copies taken at checkout.
#[derive(Debug, Clone)]
pub struct SaleLineRecord {
    pub uuid: SaleLineUuid,
    pub sale_uuid: SaleUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub quantity: u64,
    pub purchase_price: u64,
    pub sale_price: u64,
    pub tax: u64,
    pub created_at: Timestamp,
}

impl SaleLineRecord {
    /// `quantity * sale_price`, or `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        crate::domain::sales::totals::line_total(self.quantity, self.sale_price)
    }
}
