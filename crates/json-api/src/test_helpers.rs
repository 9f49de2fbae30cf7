//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use market_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartItemUuid},
        },
        clients::{
            MockClientsService,
            records::{ClientRecord, ClientUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        sales::{
            MockSalesService,
            data::{InvoiceType, PaymentType},
            records::{SaleLineRecord, SaleLineUuid, SaleRecord, SaleUuid},
        },
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
    vouchers::{VoucherRenderer, VoucherSettings},
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// Builds request state from mocks. Mocks left at their default
/// panic on any call.
#[derive(Default)]
pub(crate) struct TestState {
    products: MockProductsService,
    carts: MockCartsService,
    clients: MockClientsService,
    sales: MockSalesService,
    users: MockUsersService,
    auth: MockAuthService,
}

impl TestState {
    pub(crate) fn with_products(mut self, products: MockProductsService) -> Self {
        self.products = products;
        self
    }

    pub(crate) fn with_carts(mut self, carts: MockCartsService) -> Self {
        self.carts = carts;
        self
    }

    pub(crate) fn with_clients(mut self, clients: MockClientsService) -> Self {
        self.clients = clients;
        self
    }

    pub(crate) fn with_sales(mut self, sales: MockSalesService) -> Self {
        self.sales = sales;
        self
    }

    pub(crate) fn with_users(mut self, users: MockUsersService) -> Self {
        self.users = users;
        self
    }

    pub(crate) fn with_auth(mut self, auth: MockAuthService) -> Self {
        self.auth = auth;
        self
    }

    pub(crate) fn build(self) -> Arc<State> {
        let app = AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            clients: Arc::new(self.clients),
            sales: Arc::new(self.sales),
            users: Arc::new(self.users),
            auth: Arc::new(self.auth),
        };

        State::shared(app, VoucherRenderer::new(VoucherSettings::default()))
    }

    /// Serve `route` as the test user.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.build()))
                .hoop(inject_user)
                .push(route),
        )
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        barcode: "7750182002363".to_string(),
        name: "Rice 1kg".to_string(),
        purchase_price: 350,
        sale_price: 450,
        stock: 20,
        num_sales: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_cart_item(uuid: CartItemUuid, quantity: u64) -> CartItemRecord {
    CartItemRecord {
        uuid,
        user_uuid: TEST_USER_UUID,
        product_uuid: ProductUuid::from_uuid(Uuid::nil()),
        barcode: "7750182002363".to_string(),
        product_name: "Rice 1kg".to_string(),
        sale_price: 450,
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_client(uuid: ClientUuid) -> ClientRecord {
    ClientRecord {
        uuid,
        name: "Rosa".to_string(),
        surname: "Quispe".to_string(),
        national_id: Some("45879632".to_string()),
        phone: "987654321".to_string(),
        email: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_sale(uuid: SaleUuid) -> SaleRecord {
    SaleRecord {
        uuid,
        count: 2,
        amount: 900,
        invoice_type: InvoiceType::Unissued,
        payment_type: PaymentType::Cash,
        user_uuid: TEST_USER_UUID,
        client_uuid: None,
        closed: true,
        cancelled: false,
        lines: vec![SaleLineRecord {
            uuid: SaleLineUuid::from_uuid(Uuid::nil()),
            sale_uuid: uuid,
            product_uuid: ProductUuid::from_uuid(Uuid::nil()),
            product_name: "Rice 1kg".to_string(),
            quantity: 2,
            purchase_price: 350,
            sale_price: 450,
            tax: 0,
            created_at: Timestamp::UNIX_EPOCH,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_user(uuid: UserUuid) -> UserRecord {
    UserRecord {
        uuid,
        username: "cashier".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}
