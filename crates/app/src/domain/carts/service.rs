//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartItem,
            errors::CartsServiceError,
            records::{Cart, CartItemRecord, CartItemUuid},
            repository::PgCartItemsRepository,
        },
        products::repository::PgProductsRepository,
        sales::totals::SaleTotals,
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        let totals =
            SaleTotals::from_entries(items.iter().map(|item| (item.quantity, item.sale_price)))?;

        Ok(Cart {
            items,
            total_count: totals.count,
            total_amount: totals.amount,
        })
    }

    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidData);
        }

        let barcode = item.barcode.trim().to_string();

        let mut tx = self.db.begin().await?;

        let product = self
            .products_repository
            .find_product_by_barcode(&mut tx, &barcode)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let item = self
            .items_repository
            .upsert_cart_item(&mut tx, user, product.uuid, NewCartItem { barcode, ..item })
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn decrement_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.items_repository
            .decrement_cart_item(&mut tx, user, item)
            .await?;

        let item = self
            .items_repository
            .get_cart_item(&mut tx, user, item)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn remove_item(&self, user: UserUuid, item: CartItemUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, user, item)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn clear_cart(&self, user: UserUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self.items_repository.clear_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart with its totals.
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;

    /// Add a product to the user's cart by barcode.
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Take one unit off an entry. An entry at quantity one is left as is.
    async fn decrement_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Remove a single entry from the cart.
    async fn remove_item(&self, user: UserUuid, item: CartItemUuid) -> Result<(), CartsServiceError>;

    /// Remove every entry, returning how many were removed.
    async fn clear_cart(&self, user: UserUuid) -> Result<u64, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{add_to_cart, create_product},
    };

    use super::*;

    #[tokio::test]
    async fn new_cart_is_empty() -> TestResult {
        let ctx = TestContext::new().await;

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert!(cart.items.is_empty(), "fresh cart should have no items");
        assert_eq!(cart.total_count, 0);
        assert_eq!(cart.total_amount, 0);

        Ok(())
    }

    #[tokio::test]
    async fn adding_item_to_cart() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "A", 10).await?;

        let item = add_to_cart(&ctx, ctx.user_uuid, "A", 2).await?;

        assert_eq!(item.product_uuid, product.uuid);
        assert_eq!(item.barcode, "A");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.sale_price, 10);

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_count, 2);
        assert_eq!(cart.total_amount, 20);

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_barcode_increments_existing_entry() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "A", 10).await?;

        let first = add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;
        let second = add_to_cart(&ctx, ctx.user_uuid, "A", 3).await?;

        assert_eq!(second.uuid, first.uuid, "entry should be reused");
        assert_eq!(second.quantity, 4);

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert_eq!(cart.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn adding_unknown_barcode_returns_product_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = add_to_cart(&ctx, ctx.user_uuid, "nope", 1).await;

        assert!(
            matches!(result, Err(CartsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert!(cart.items.is_empty(), "cart should be unchanged");

        Ok(())
    }

    #[tokio::test]
    async fn adding_zero_quantity_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "A", 10).await?;

        let result = add_to_cart(&ctx, ctx.user_uuid, "A", 0).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn decrement_reduces_quantity_and_stops_at_one() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "A", 10).await?;

        let item = add_to_cart(&ctx, ctx.user_uuid, "A", 2).await?;

        let item = ctx.carts.decrement_item(ctx.user_uuid, item.uuid).await?;

        assert_eq!(item.quantity, 1);

        let item = ctx.carts.decrement_item(ctx.user_uuid, item.uuid).await?;

        assert_eq!(item.quantity, 1, "quantity should never drop below one");

        Ok(())
    }

    #[tokio::test]
    async fn decrement_unknown_item_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .carts
            .decrement_item(ctx.user_uuid, CartItemUuid::new())
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn remove_item_deletes_only_that_entry() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "A", 10).await?;
        create_product(&ctx, "B", 5).await?;

        let a = add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;
        let b = add_to_cart(&ctx, ctx.user_uuid, "B", 1).await?;

        ctx.carts.remove_item(ctx.user_uuid, a.uuid).await?;

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().map(|item| item.uuid), Some(b.uuid));

        let result = ctx.carts.remove_item(ctx.user_uuid, a.uuid).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound on second removal, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn clear_cart_removes_everything() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "A", 10).await?;
        create_product(&ctx, "B", 5).await?;

        add_to_cart(&ctx, ctx.user_uuid, "A", 2).await?;
        add_to_cart(&ctx, ctx.user_uuid, "B", 1).await?;

        let removed = ctx.carts.clear_cart(ctx.user_uuid).await?;

        assert_eq!(removed, 2);

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert!(cart.items.is_empty(), "cart should be empty after clearing");

        Ok(())
    }

    #[tokio::test]
    async fn carts_are_scoped_per_user() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_user("other").await;

        create_product(&ctx, "A", 10).await?;

        let item = add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;

        let cart = ctx.carts.get_cart(other).await?;

        assert!(cart.items.is_empty(), "other user should not see the item");

        let result = ctx.carts.remove_item(other, item.uuid).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound for another user's item, got {result:?}"
        );

        Ok(())
    }
}
