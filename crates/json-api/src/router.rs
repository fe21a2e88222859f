//! App Router

use salvo::Router;

use crate::{basket, catalog, orders, payments, profiles, session};

pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(session::middleware)
        .push(
            Router::with_path("basket")
                .get(basket::get::handler)
                .post(basket::add::handler)
                .delete(basket::remove::handler),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler),
        )
        .push(
            Router::with_path("order/{id}")
                .get(orders::get::handler)
                .post(orders::confirm::handler),
        )
        .push(Router::with_path("payment/{id}").post(payments::create::handler))
        .push(
            Router::with_path("profile")
                .get(profiles::get::handler)
                .post(profiles::update::handler),
        )
        .push(Router::with_path("catalog").get(catalog::index::handler))
        .push(
            Router::with_path("product/{id}")
                .get(catalog::product::handler)
                .push(Router::with_path("reviews").post(catalog::reviews::handler)),
        )
        .push(Router::with_path("tags").get(catalog::tags::handler))
        .push(Router::with_path("categories").get(catalog::categories::handler))
        .push(
            Router::with_path("products")
                .push(Router::with_path("popular").get(catalog::popular::handler))
                .push(Router::with_path("limited").get(catalog::limited::handler)),
        )
        .push(Router::with_path("banners").get(catalog::banners::handler))
        .push(Router::with_path("sales").get(catalog::sales::handler))
}
