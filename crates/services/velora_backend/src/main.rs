// File: services/velora_backend/src/main.rs
mod app_state;
mod service_factory;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::warn;
use velora_config::load_config;

use app_state::AppState;
#[cfg(feature = "appointments")]
use velora_appointments::routes as appointments_routes;
#[cfg(feature = "shop")]
use velora_shop::routes as shop_routes;

use velora_common::services::ServiceFactory;

#[axum::debug_handler]
async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let database = match state.service_factory.db_client() {
        Some(client) => client.is_healthy().await,
        None => false,
    };
    Json(json!({
        "status": "ok",
        "database": database,
        "appointments": state.config.use_appointments,
        "shop": state.config.use_shop,
    }))
}

#[tokio::main]
async fn main() {
    velora_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let app_state = AppState::new(config.clone()).await;

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Velora API!" }))
        .route("/health", get(health_handler))
        .with_state(app_state.clone());

    let api_router = Router::new().nest("/api", {
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut router = api_router;
        #[cfg(feature = "appointments")]
        {
            match app_state.service_factory.schedule_store() {
                Some(schedule) => {
                    router = router.merge(appointments_routes::routes(
                        config.clone(),
                        schedule,
                        app_state.service_factory.notification_service(),
                    ));
                }
                None => warn!("Appointments feature compiled in but not available at runtime"),
            }
        }
        #[cfg(feature = "shop")]
        {
            match app_state.service_factory.order_store() {
                Some(orders) => {
                    router = router.merge(shop_routes::routes(
                        config.clone(),
                        orders,
                        app_state.service_factory.notification_service(),
                    ));
                }
                None => warn!("Shop feature compiled in but not available at runtime"),
            }
        }
        router
    });

    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "appointments")]
        use velora_appointments::doc::AppointmentsApiDoc;
        #[cfg(feature = "shop")]
        use velora_shop::doc::ShopApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Velora API",
                version = "0.1.0",
                description = "Velora Clinic Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Velora", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        // Create the merged OpenAPI document
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "appointments")]
        openapi_doc.merge(AppointmentsApiDoc::openapi());
        #[cfg(feature = "shop")]
        openapi_doc.merge(ShopApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        // Create the Swagger UI route, referencing the merged doc
        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        // Merge the Swagger UI into the main app router
        app = app.merge(swagger_ui);
    }

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ../../dist");

        // Serve static files at a specific path
        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);

        // You can also keep the fallback service for non-matched routes
        app = app.fallback_service(ServeDir::new("../dist"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind server address");
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
