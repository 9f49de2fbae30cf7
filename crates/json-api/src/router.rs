//! App Router

use salvo::Router;

use crate::{auth, carts, clients, products, sales};

/// Routes that require a bearer token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .delete(carts::clear::handler)
                .push(
                    Router::with_path("items")
                        .post(carts::items::create::handler)
                        .push(
                            Router::with_path("{item}")
                                .delete(carts::items::delete::handler)
                                .push(
                                    Router::with_path("decrement")
                                        .post(carts::items::decrement::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("sales")
                .get(sales::index::handler)
                .post(sales::create::handler)
                .push(Router::with_path("simple").post(sales::simple::handler))
                .push(
                    Router::with_path("{sale}")
                        .get(sales::get::handler)
                        .push(Router::with_path("cancel").post(sales::cancel::handler))
                        .push(Router::with_path("voucher").get(sales::voucher::handler)),
                ),
        )
        .push(
            Router::with_path("clients")
                .get(clients::index::handler)
                .post(clients::create::handler)
                .push(Router::with_path("{client}").get(clients::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
