//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,

    /// Scan code printed on the product.
    pub barcode: String,

    pub name: String,

    /// Unit cost, in minor currency units.
    pub purchase_price: u64,

    /// Unit price charged at the till, in minor currency units.
    pub sale_price: u64,

    /// Units on hand. May go negative when untracked stock is sold.
    pub stock: i64,

    /// Units sold across all non-cancelled sales.
    pub num_sales: i64,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}
