//! Test context for service-level integration tests.

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        carts::PgCartsService,
        clients::PgClientsService,
        products::PgProductsService,
        sales::PgSalesService,
        users::{PgUsersService, UsersService, data::NewUser, records::UserUuid},
    },
};

use super::db::TestDb;

/// A fresh database plus every service wired against it.
///
/// A default user is created up front so cart and sale tests have an
/// issuing user to act as.
pub struct TestContext {
    pub db: TestDb,
    pub user_uuid: UserUuid,
    pub users: PgUsersService,
    pub products: PgProductsService,
    pub carts: PgCartsService,
    pub clients: PgClientsService,
    pub sales: PgSalesService,
    pub auth: PgAuthService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let users = PgUsersService::new(db.clone());

        let user_uuid = UserUuid::new();

        users
            .create_user(NewUser {
                uuid: user_uuid,
                username: "cashier".to_string(),
            })
            .await
            .expect("Failed to create default test user");

        Self {
            products: PgProductsService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            clients: PgClientsService::new(db.clone()),
            sales: PgSalesService::new(db.clone()),
            auth: PgAuthService::new(db.pool().clone()),
            users,
            user_uuid,
            db: test_db,
        }
    }

    /// Create an additional user, for tests that check per-user scoping.
    pub async fn create_user(&self, username: &str) -> UserUuid {
        let uuid = UserUuid::new();

        self.users
            .create_user(NewUser {
                uuid,
                username: username.to_string(),
            })
            .await
            .expect("Failed to create test user");

        uuid
    }
}
