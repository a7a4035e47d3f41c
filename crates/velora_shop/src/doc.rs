// File: crates/velora_shop/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    CreateOrderRequest, CreateOrderResponse, OrderView, ProductListResponse, ProductView,
};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/shop/products",
    responses(
        (status = 200, description = "The configured product list", body = ProductListResponse),
        (status = 503, description = "Shop disabled")
    )
)]
fn doc_list_products_handler() {}

#[utoipa::path(
    post,
    path = "/shop/orders",
    request_body(content = CreateOrderRequest, example = json!({
        "sku": "oil-30",
        "quantity": 2,
        "customer_name": "Dana Meier",
        "customer_email": "dana@example.com"
    })),
    responses(
        (status = 200, description = "Order placed", body = CreateOrderResponse,
         example = json!({
             "success": true,
             "reference": "7b0c9f4e-5f27-4d7e-ae0b-0e16f8a8e7a1",
             "total_amount": 4900,
             "currency": "CHF",
             "message": "Order placed successfully."
         })
        ),
        (status = 400, description = "Unknown product or invalid quantity")
    )
)]
fn doc_create_order_handler() {}

#[utoipa::path(
    get,
    path = "/shop/orders/{reference}",
    params(
        ("reference" = String, Path, description = "The reference of the order to look up")
    ),
    responses(
        (status = 200, description = "The order", body = OrderView),
        (status = 404, description = "Order not found")
    )
)]
fn doc_get_order_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_products_handler,
        doc_create_order_handler,
        doc_get_order_handler
    ),
    components(
        schemas(
            ProductView,
            ProductListResponse,
            CreateOrderRequest,
            CreateOrderResponse,
            OrderView
        )
    ),
    tags(
        (name = "shop", description = "Product sales API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct ShopApiDoc;
