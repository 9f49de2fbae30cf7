//! Test Helpers

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError,
            data::NewCartItem,
            records::{CartItemRecord, CartItemUuid},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
        users::records::UserUuid,
    },
    test::TestContext,
};

/// Product with ten units in stock and a purchase price of half the sale price.
pub(crate) fn new_product(barcode: &str, sale_price: u64) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        barcode: barcode.to_string(),
        name: format!("Product {barcode}"),
        purchase_price: sale_price / 2,
        sale_price,
        stock: 10,
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    barcode: &str,
    sale_price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(new_product(barcode, sale_price))
        .await
}

pub(crate) async fn add_to_cart(
    ctx: &TestContext,
    user: UserUuid,
    barcode: &str,
    quantity: u64,
) -> Result<CartItemRecord, CartsServiceError> {
    ctx.carts
        .add_item(
            user,
            NewCartItem {
                uuid: CartItemUuid::new(),
                barcode: barcode.to_string(),
                quantity,
            },
        )
        .await
}
