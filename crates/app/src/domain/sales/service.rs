//! Sales service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        carts::repository::PgCartItemsRepository,
        products::repository::PgProductsRepository,
        sales::{
            data::NewSale,
            errors::SalesServiceError,
            records::{SaleRecord, SaleUuid},
            repositories::{PgCheckoutRepository, PgSaleLinesRepository, PgSalesRepository},
            totals::SaleTotals,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgSalesService {
    db: Db,
    sales: PgSalesRepository,
    lines: PgSaleLinesRepository,
    checkout: PgCheckoutRepository,
    cart_items: PgCartItemsRepository,
    products: PgProductsRepository,
}

impl PgSalesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            sales: PgSalesRepository::new(),
            lines: PgSaleLinesRepository::new(),
            checkout: PgCheckoutRepository::new(),
            cart_items: PgCartItemsRepository::new(),
            products: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl SalesService for PgSalesService {
    #[tracing::instrument(
        name = "sales.service.checkout",
        skip(self, sale),
        fields(
            user_uuid = %user,
            sale_uuid = %sale.uuid,
            invoice_type = %sale.invoice_type,
            payment_type = %sale.payment_type,
            line_count = tracing::field::Empty
        ),
        err
    )]
    async fn checkout(
        &self,
        user: UserUuid,
        sale: NewSale,
    ) -> Result<SaleRecord, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self.checkout.lock_cart_entries(&mut tx, user).await?;

        if entries.is_empty() {
            return Err(SalesServiceError::EmptyCart);
        }

        let totals = SaleTotals::from_entries(
            entries
                .iter()
                .map(|entry| (entry.quantity, entry.sale_price)),
        )?;

        let mut record = self.sales.create_sale(&mut tx, user, &sale, totals).await?;

        for entry in &entries {
            let line = self
                .lines
                .create_sale_line(&mut tx, record.uuid, entry)
                .await?;

            self.products
                .adjust_sold_units(&mut tx, entry.product_uuid, i64::try_from(entry.quantity)?)
                .await?;

            record.lines.push(line);
        }

        self.cart_items.clear_cart(&mut tx, user).await?;

        tx.commit().await?;

        Span::current().record("line_count", record.lines.len());

        info!(
            sale_uuid = %record.uuid,
            count = record.count,
            amount = record.amount,
            "created sale"
        );

        Ok(record)
    }

    #[tracing::instrument(name = "sales.service.cancel_sale", skip(self), fields(sale_uuid = %sale), err)]
    async fn cancel_sale(&self, sale: SaleUuid) -> Result<SaleRecord, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(mut record) = self.sales.cancel_sale(&mut tx, sale).await? else {
            // Distinguishes a missing sale (NotFound) from one cancelled earlier.
            self.sales.get_sale(&mut tx, sale).await?;

            return Err(SalesServiceError::AlreadyCancelled);
        };

        record.lines = self.lines.get_sale_lines(&mut tx, sale).await?;

        for line in &record.lines {
            let units = i64::try_from(line.quantity)?;

            self.products
                .adjust_sold_units(&mut tx, line.product_uuid, -units)
                .await?;
        }

        tx.commit().await?;

        info!(sale_uuid = %record.uuid, "cancelled sale");

        Ok(record)
    }

    async fn get_sale(&self, sale: SaleUuid) -> Result<SaleRecord, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.sales.get_sale(&mut tx, sale).await?;

        record.lines = self.lines.get_sale_lines(&mut tx, sale).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_sales(&self) -> Result<Vec<SaleRecord>, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let sales = self.sales.list_sales(&mut tx).await?;

        tx.commit().await?;

        Ok(sales)
    }
}

#[automock]
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Turn the user's cart into a closed sale.
    ///
    /// The sale, its lines, the stock movements and the emptied cart are
    /// committed together or not at all.
    async fn checkout(
        &self,
        user: UserUuid,
        sale: NewSale,
    ) -> Result<SaleRecord, SalesServiceError>;

    /// Flag a sale as cancelled and return its units to stock.
    async fn cancel_sale(&self, sale: SaleUuid) -> Result<SaleRecord, SalesServiceError>;

    /// Retrieve a sale together with its lines.
    async fn get_sale(&self, sale: SaleUuid) -> Result<SaleRecord, SalesServiceError>;

    /// Non-cancelled sales, newest first, without lines.
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, SalesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::CartsService,
            clients::{ClientsService, data::NewClient, records::ClientUuid},
            products::{ProductsService, data::ProductUpdate},
            sales::{
                data::{InvoiceType, PaymentType},
                records::SaleLineRecord,
            },
        },
        test::{
            TestContext,
            helpers::{add_to_cart, create_product},
        },
    };

    use super::*;

    #[tokio::test]
    async fn checkout_creates_sale_from_cart() -> TestResult {
        let ctx = TestContext::new().await;

        let a = create_product(&ctx, "A", 10).await?;
        let b = create_product(&ctx, "B", 5).await?;

        add_to_cart(&ctx, ctx.user_uuid, "A", 2).await?;
        add_to_cart(&ctx, ctx.user_uuid, "B", 1).await?;

        let sale = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await?;

        assert_eq!(sale.count, 3);
        assert_eq!(sale.amount, 25);
        assert_eq!(sale.lines.len(), 2);
        assert_eq!(sale.user_uuid, ctx.user_uuid);
        assert!(sale.closed, "sales are closed at checkout");
        assert!(!sale.cancelled, "new sale must not be cancelled");

        let line_count: u64 = sale.lines.iter().map(|line| line.quantity).sum();
        let line_amount: u64 = sale.lines.iter().filter_map(SaleLineRecord::total).sum();

        assert_eq!(line_count, sale.count);
        assert_eq!(line_amount, sale.amount);
        assert!(sale.lines.iter().all(|line| line.tax == 0), "tax is zero");

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert!(cart.items.is_empty(), "cart should be emptied by checkout");

        let a = ctx.products.get_product(a.uuid).await?;
        let b = ctx.products.get_product(b.uuid).await?;

        assert_eq!((a.stock, a.num_sales), (8, 2));
        assert_eq!((b.stock, b.num_sales), (9, 1));

        Ok(())
    }

    #[tokio::test]
    async fn checkout_empty_cart_creates_no_sale() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await;

        assert!(
            matches!(result, Err(SalesServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );

        assert!(ctx.sales.list_sales().await?.is_empty(), "no sale expected");

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert!(cart.items.is_empty(), "cart should still be empty");
        assert_eq!(cart.total_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_taken_sale_uuid_leaves_cart_and_stock() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "A", 10).await?;
        let sale_uuid = SaleUuid::new();

        add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;

        ctx.sales
            .checkout(ctx.user_uuid, NewSale::simple(sale_uuid))
            .await?;

        add_to_cart(&ctx, ctx.user_uuid, "A", 3).await?;

        let result = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(sale_uuid))
            .await;

        assert!(
            matches!(result, Err(SalesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert_eq!(cart.items.len(), 1, "cart entry should survive");
        assert_eq!(cart.total_count, 3, "cart quantity should be untouched");

        let product = ctx.products.get_product(product.uuid).await?;

        assert_eq!(
            (product.stock, product.num_sales),
            (9, 1),
            "only the first checkout should move stock"
        );
        assert_eq!(ctx.sales.list_sales().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_after_barcode_reuse_sells_the_live_product() -> TestResult {
        let ctx = TestContext::new().await;

        let old = create_product(&ctx, "A", 10).await?;
        add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;

        ctx.products.delete_product(old.uuid).await?;

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert!(cart.items.is_empty(), "deleted product should leave the cart");

        let new = create_product(&ctx, "A", 99).await?;
        let entry = add_to_cart(&ctx, ctx.user_uuid, "A", 2).await?;

        assert_eq!(entry.product_uuid, new.uuid);
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.sale_price, 99);

        let sale = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await?;

        assert_eq!(sale.count, 2);
        assert_eq!(sale.amount, 198);

        let line = sale.lines.first().ok_or("sale should have a line")?;

        assert_eq!(sale.lines.len(), 1);
        assert_eq!(line.product_uuid, new.uuid);
        assert_eq!(line.sale_price, 99);

        let new = ctx.products.get_product(new.uuid).await?;

        assert_eq!((new.stock, new.num_sales), (8, 2));

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_client_and_document_types() -> TestResult {
        let ctx = TestContext::new().await;

        let client = ctx
            .clients
            .create_client(NewClient {
                uuid: ClientUuid::new(),
                name: "Rosa".to_string(),
                ..NewClient::default()
            })
            .await?;

        create_product(&ctx, "A", 10).await?;
        add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;

        let sale = ctx
            .sales
            .checkout(
                ctx.user_uuid,
                NewSale {
                    uuid: SaleUuid::new(),
                    invoice_type: InvoiceType::Invoice,
                    payment_type: PaymentType::Card,
                    client_uuid: Some(client.uuid),
                },
            )
            .await?;

        let fetched = ctx.sales.get_sale(sale.uuid).await?;

        assert_eq!(fetched.invoice_type, InvoiceType::Invoice);
        assert_eq!(fetched.payment_type, PaymentType::Card);
        assert_eq!(fetched.client_uuid, Some(client.uuid));
        assert_eq!(fetched.lines.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_unknown_client_rolls_back() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "A", 10).await?;
        add_to_cart(&ctx, ctx.user_uuid, "A", 2).await?;

        let result = ctx
            .sales
            .checkout(
                ctx.user_uuid,
                NewSale {
                    client_uuid: Some(ClientUuid::new()),
                    ..NewSale::simple(SaleUuid::new())
                },
            )
            .await;

        assert!(
            matches!(result, Err(SalesServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert_eq!(cart.total_count, 2, "cart should be untouched");

        let product = ctx.products.get_product(product.uuid).await?;

        assert_eq!(product.stock, 10, "stock should be untouched");

        Ok(())
    }

    #[tokio::test]
    async fn checkout_only_consumes_own_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_user("other").await;

        create_product(&ctx, "A", 10).await?;

        add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;
        add_to_cart(&ctx, other, "A", 3).await?;

        let sale = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await?;

        assert_eq!(sale.count, 1);

        let other_cart = ctx.carts.get_cart(other).await?;

        assert_eq!(other_cart.total_count, 3);

        Ok(())
    }

    #[tokio::test]
    async fn sale_lines_keep_prices_from_checkout() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "A", 10).await?;
        add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;

        let sale = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await?;

        ctx.products
            .update_product(
                product.uuid,
                ProductUpdate {
                    name: "Renamed".to_string(),
                    purchase_price: 1,
                    sale_price: 99,
                    stock: 0,
                },
            )
            .await?;

        let fetched = ctx.sales.get_sale(sale.uuid).await?;
        let line = fetched.lines.first().ok_or("sale should have a line")?;

        assert_eq!(line.product_name, product.name);
        assert_eq!(line.sale_price, 10);
        assert_eq!(line.purchase_price, product.purchase_price);

        Ok(())
    }

    #[tokio::test]
    async fn cancel_sale_restores_stock_and_keeps_lines() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "A", 10).await?;
        add_to_cart(&ctx, ctx.user_uuid, "A", 4).await?;

        let sale = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await?;

        let cancelled = ctx.sales.cancel_sale(sale.uuid).await?;

        assert!(cancelled.cancelled, "sale should be flagged cancelled");

        let fetched = ctx.sales.get_sale(sale.uuid).await?;

        assert!(fetched.cancelled, "flag should persist");
        assert_eq!(fetched.lines.len(), sale.lines.len());
        assert_eq!(fetched.count, sale.count);
        assert_eq!(fetched.amount, sale.amount);

        let product = ctx.products.get_product(product.uuid).await?;

        assert_eq!((product.stock, product.num_sales), (10, 0));

        let listed = ctx.sales.list_sales().await?;

        assert!(listed.is_empty(), "cancelled sales are not listed");

        Ok(())
    }

    #[tokio::test]
    async fn cancel_sale_twice_restores_stock_once() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "A", 10).await?;
        add_to_cart(&ctx, ctx.user_uuid, "A", 3).await?;

        let sale = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await?;

        ctx.sales.cancel_sale(sale.uuid).await?;

        let result = ctx.sales.cancel_sale(sale.uuid).await;

        assert!(
            matches!(result, Err(SalesServiceError::AlreadyCancelled)),
            "expected AlreadyCancelled, got {result:?}"
        );

        let product = ctx.products.get_product(product.uuid).await?;

        assert_eq!(product.stock, 10);

        Ok(())
    }

    #[tokio::test]
    async fn cancel_unknown_sale_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.sales.cancel_sale(SaleUuid::new()).await;

        assert!(
            matches!(result, Err(SalesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_unknown_sale_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.sales.get_sale(SaleUuid::new()).await;

        assert!(
            matches!(result, Err(SalesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_sales_is_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "A", 10).await?;

        add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;
        let first = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await?;

        add_to_cart(&ctx, ctx.user_uuid, "A", 1).await?;
        let second = ctx
            .sales
            .checkout(ctx.user_uuid, NewSale::simple(SaleUuid::new()))
            .await?;

        let uuids: Vec<SaleUuid> = ctx
            .sales
            .list_sales()
            .await?
            .into_iter()
            .map(|sale| sale.uuid)
            .collect();

        assert_eq!(uuids, [second.uuid, first.uuid]);

        Ok(())
    }
}
