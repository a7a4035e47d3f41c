// --- File: crates/velora_shop/src/logic.rs ---
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use velora_common::models::{Order, ORDER_STATUS_PENDING};
use velora_config::{Product, ShopConfig};

use crate::error::ShopError;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Fallback currency when neither the product nor the shop names one.
const DEFAULT_CURRENCY: &str = "CHF";

/// Hard ceiling on the per-order quantity; the clinic sells retail, not
/// wholesale.
const MAX_QUANTITY: i64 = 50;

// --- Data Structures ---

/// Public view of a sellable product.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ProductView {
    #[cfg_attr(feature = "openapi", schema(example = "oil-30"))]
    pub sku: String,
    #[cfg_attr(feature = "openapi", schema(example = "Argan Oil 30ml"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = 2450))]
    pub unit_amount: i64,
    #[cfg_attr(feature = "openapi", schema(example = "CHF"))]
    pub currency: String,
    pub description: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ProductListResponse {
    pub products: Vec<ProductView>,
}

/// Request from the frontend to place a product order.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateOrderRequest {
    #[cfg_attr(feature = "openapi", schema(example = "oil-30"))]
    pub sku: String,
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub quantity: i64,
    pub customer_name: String,
    pub customer_email: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateOrderResponse {
    pub success: bool,
    #[cfg_attr(feature = "openapi", schema(example = "7b0c9f4e-..."))]
    pub reference: String,
    #[cfg_attr(feature = "openapi", schema(example = 4900))]
    pub total_amount: i64,
    #[cfg_attr(feature = "openapi", schema(example = "CHF"))]
    pub currency: String,
    pub message: String,
}

/// Public view of a placed order, for the confirmation page.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct OrderView {
    pub reference: String,
    pub sku: String,
    pub product_name: String,
    pub quantity: i64,
    pub total_amount: i64,
    pub currency: String,
    pub status: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            reference: order.reference,
            sku: order.sku,
            product_name: order.product_name,
            quantity: order.quantity,
            total_amount: order.total_amount,
            currency: order.currency,
            status: order.status,
        }
    }
}

// --- Core Logic Functions ---

fn currency_for(product: &Product, shop: &ShopConfig) -> String {
    product
        .currency
        .clone()
        .or_else(|| shop.default_currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// The configured catalog as presented to the public site.
pub fn product_list(shop: &ShopConfig) -> Vec<ProductView> {
    shop.products
        .iter()
        .map(|product| ProductView {
            sku: product.sku.clone(),
            name: product.name.clone(),
            unit_amount: product.unit_amount,
            currency: currency_for(product, shop),
            description: product.description.clone(),
        })
        .collect()
}

/// Validates an order request against the catalog and prices it.
///
/// The returned order is ready for the store: reference assigned, total
/// computed from the configured unit price, status pending.
pub fn build_order(shop: &ShopConfig, request: &CreateOrderRequest) -> Result<Order, ShopError> {
    if !(1..=MAX_QUANTITY).contains(&request.quantity) {
        return Err(ShopError::InvalidQuantity(request.quantity));
    }
    if request.customer_name.trim().is_empty() {
        return Err(ShopError::ValidationError(
            "customer_name must not be empty".to_string(),
        ));
    }

    let product = shop
        .products
        .iter()
        .find(|product| product.sku == request.sku)
        .ok_or_else(|| ShopError::UnknownProduct(request.sku.clone()))?;

    Ok(Order {
        id: None,
        reference: Uuid::new_v4().to_string(),
        sku: product.sku.clone(),
        product_name: product.name.clone(),
        quantity: request.quantity,
        unit_amount: product.unit_amount,
        total_amount: product.unit_amount * request.quantity,
        currency: currency_for(product, shop),
        customer_name: request.customer_name.trim().to_string(),
        customer_email: request.customer_email.clone(),
        status: ORDER_STATUS_PENDING.to_string(),
        created_at: None,
    })
}
