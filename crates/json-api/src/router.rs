//! App Router

use salvo::Router;

use crate::{items, orders};

/// Store routes under the fixed `api/v1/store` base path.
pub(crate) fn app_router() -> Router {
    Router::with_path("api/v1/store")
        .push(Router::with_path("items").get(items::index::handler))
        .push(
            Router::with_path("order")
                .push(Router::with_path("checkout").post(orders::checkout::handler))
                .push(Router::with_path("{order_id}").get(orders::get::handler)),
        )
}
