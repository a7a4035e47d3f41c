// --- File: crates/velora_shop/src/handlers.rs ---
use crate::error::ShopError;
use crate::logic::{
    build_order, product_list, CreateOrderRequest, CreateOrderResponse, OrderView,
    ProductListResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};
use velora_common::services::{BoxedError, Notice, NotificationService, OrderStore};
use velora_common::{map_json_error, not_found, VeloraError};
use velora_config::{AppConfig, ShopConfig};

// Define shared state needed by shop handlers
#[derive(Clone)]
pub struct ShopState {
    pub config: Arc<AppConfig>,
    pub orders: Arc<dyn OrderStore<Error = BoxedError>>,
    pub notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
}

impl ShopState {
    fn shop_config(&self) -> Result<&ShopConfig, Response> {
        if !self.config.use_shop {
            return Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "The shop is disabled.".to_string(),
            )
                .into_response());
        }
        self.config.shop.as_ref().ok_or_else(|| {
            info!("Shop configuration missing in AppConfig.");
            VeloraError::ConfigError("Shop configuration missing".to_string()).into_response()
        })
    }
}

/// Handler to list the sellable products.
#[axum::debug_handler]
pub async fn list_products_handler(
    State(state): State<Arc<ShopState>>,
) -> Result<Json<ProductListResponse>, Response> {
    let shop = state.shop_config()?;

    Ok(Json(ProductListResponse {
        products: product_list(shop),
    }))
}

/// Handler to place a product order.
#[axum::debug_handler]
pub async fn create_order_handler(
    State(state): State<Arc<ShopState>>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, Response> {
    let shop = state.shop_config()?;

    let order = map_json_error(build_order(shop, &payload), VeloraError::from)?.0;

    let created = state.orders.create_order(order).await.map_err(|err| {
        info!("Error persisting order: {}", err);
        VeloraError::from(ShopError::StoreError(err.to_string())).into_response()
    })?;

    // Delivery failures never fail the order that produced the notice.
    if let Some(notifier) = &state.notifier {
        let notice = Notice {
            kind: "order.created".to_string(),
            subject: format!("New order for {}", created.product_name),
            body: json!({
                "reference": created.reference,
                "sku": created.sku,
                "quantity": created.quantity,
                "total_amount": created.total_amount,
                "currency": created.currency,
                "customer_name": created.customer_name,
            }),
        };
        match notifier.deliver(notice).await {
            Ok(result) if result.delivered => debug!("Order notice delivered"),
            Ok(result) => warn!("Order notice not delivered: {:?}", result.detail),
            Err(err) => warn!("Order notice delivery failed: {}", err),
        }
    }

    info!("Successfully created order: {}", created.reference);
    Ok(Json(CreateOrderResponse {
        success: true,
        reference: created.reference.clone(),
        total_amount: created.total_amount,
        currency: created.currency.clone(),
        message: "Order placed successfully.".to_string(),
    }))
}

/// Handler to look up an order for the confirmation page.
#[axum::debug_handler]
pub async fn get_order_handler(
    State(state): State<Arc<ShopState>>,
    Path(reference): Path<String>,
) -> Result<Json<OrderView>, Response> {
    state.shop_config()?;

    let order = state.orders.find_order(&reference).await.map_err(|err| {
        info!("Error looking up order: {}", err);
        VeloraError::from(ShopError::StoreError(err.to_string())).into_response()
    })?;

    match order {
        Some(order) => Ok(Json(order.into())),
        None => Err(not_found(format!("No order with reference {}", reference)).into_response()),
    }
}
