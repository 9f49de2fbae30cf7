//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub barcode: String,
    pub name: String,
    pub purchase_price: u64,
    pub sale_price: u64,
    pub stock: i64,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub purchase_price: u64,
    pub sale_price: u64,
    pub stock: i64,
}
