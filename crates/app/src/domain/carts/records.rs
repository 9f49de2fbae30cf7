//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Item Record
#[derive(Debug, Clone)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub barcode: String,
    pub product_name: String,

    /// Current unit sale price of the product.
    pub sale_price: u64,

    pub quantity: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user's pending sale.
#[derive(Debug, Clone)]
pub struct Cart {
    pub items: Vec<CartItemRecord>,
    pub total_count: u64,
    pub total_amount: u64,
}
