// --- File: crates/velora_shop/src/routes.rs ---

use crate::handlers::{create_order_handler, get_order_handler, list_products_handler, ShopState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use velora_common::services::{BoxedError, NotificationService, OrderStore};
use velora_config::AppConfig;

/// Creates a router containing all routes for the shop feature.
///
/// The order store and the notifier are constructed once by the backend and
/// injected here.
pub fn routes(
    config: Arc<AppConfig>,
    orders: Arc<dyn OrderStore<Error = BoxedError>>,
    notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
) -> Router {
    let state = Arc::new(ShopState {
        config,
        orders,
        notifier,
    });

    Router::new()
        .route("/shop/products", get(list_products_handler))
        .route("/shop/orders", post(create_order_handler))
        .route("/shop/orders/{reference}", get(get_order_handler))
        .with_state(state)
}
