//! Cart Data

use crate::domain::carts::records::CartItemUuid;

/// New Cart Item Data
///
/// Adding a barcode that is already in the cart increments the existing
/// entry by `quantity` instead of creating a second one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub barcode: String,
    pub quantity: u64,
}
